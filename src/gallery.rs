use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "public/gallery"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct GalleryFiles;

/// Static description of a gallery tile; the HTML body lives in `public/gallery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub file: &'static str,
    pub image_url: &'static str,
}

pub static GALLERY: [GalleryEntry; 2] = [
    GalleryEntry {
        id: "multiSearch",
        title: "Multi Search",
        file: "multi-search.html",
        image_url: "https://images.unsplash.com/photo-1488610675821-b5776c22e019?ixlib=rb-1.2.1&auto=format&fit=crop&w=750&q=80",
    },
    GalleryEntry {
        id: "tezos",
        title: "TezosIL Bakery website",
        file: "tezos.html",
        image_url: "/gallery/tezos-logo.png",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no gallery item named {0}")]
    UnknownItem(String),
    #[error("gallery content {0} is missing")]
    MissingContent(&'static str),
}

pub fn entry(id: &str) -> Option<&'static GalleryEntry> {
    GALLERY.iter().find(|e| e.id == id)
}

pub fn get_item(id: &str) -> Result<GalleryItem, GalleryError> {
    let entry = entry(id).ok_or_else(|| GalleryError::UnknownItem(id.to_string()))?;
    let file = GalleryFiles::get(entry.file).ok_or(GalleryError::MissingContent(entry.file))?;
    Ok(GalleryItem {
        id: entry.id.to_string(),
        title: entry.title.to_string(),
        image_url: entry.image_url.to_string(),
        content: String::from_utf8_lossy(&file.data).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_content() {
        for entry in GALLERY {
            let item = get_item(entry.id).unwrap();
            assert_eq!(item.title, entry.title);
            assert!(item.content.contains("<p>"));
        }
    }

    #[test]
    fn test_unknown_item() {
        assert_eq!(
            get_item("nothing"),
            Err(GalleryError::UnknownItem("nothing".to_string()))
        );
        assert!(entry("").is_none());
    }
}
