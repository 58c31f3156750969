mod icon;
mod validate;

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt, sync::LazyLock};
use thiserror::Error;

pub use icon::Icon;
use validate::Validate;

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<Document, Content>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "public/data"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct DataFiles;

/// One of the JSON documents under `public/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Document {
    Hero,
    Projects,
    WorkExperience,
    Milestones,
    Interests,
    Now,
}

impl Document {
    pub const ALL: [Document; 6] = [
        Document::Hero,
        Document::Projects,
        Document::WorkExperience,
        Document::Milestones,
        Document::Interests,
        Document::Now,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Hero => "hero.json",
            Document::Projects => "projects.json",
            Document::WorkExperience => "work-experience.json",
            Document::Milestones => "milestones.json",
            Document::Interests => "interests.json",
            Document::Now => "now.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroData {
    pub name: String,
    pub title: String,
    pub skills: String,
    pub description: String,
    pub social: Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialKind {
    Email,
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Email => "Email",
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialKind::Email => "icon-mail",
            SocialKind::GitHub => "icon-github",
            SocialKind::LinkedIn => "icon-linkedin",
        }
    }
}

/// A contact link derived from [`Social`], ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub value: String,
    pub href: String,
}

impl SocialLink {
    /// Web links open in a new tab; `mailto:` links do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

impl Social {
    pub fn links(&self) -> Vec<SocialLink> {
        vec![
            SocialLink {
                kind: SocialKind::Email,
                value: self.email.clone(),
                href: format!("mailto:{}", self.email),
            },
            SocialLink {
                kind: SocialKind::GitHub,
                value: strip_scheme(&self.github).to_string(),
                href: self.github.clone(),
            },
            SocialLink {
                kind: SocialKind::LinkedIn,
                value: strip_scheme(&self.linkedin).to_string(),
                href: self.linkedin.clone(),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub problem: String,
    pub solution: String,
    pub impact: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsData {
    pub featured_project: Project,
    pub projects: Vec<Project>,
    pub all_techs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

impl WorkExperienceItem {
    pub fn achievements(&self) -> &[String] {
        self.achievements.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceData {
    pub experiences: Vec<WorkExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Milestone {
    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Interest {
    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowData {
    pub last_updated: String,
    pub current_work: String,
    pub learning: Vec<String>,
    pub status: String,
}

/// A parsed and validated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Hero(HeroData),
    Projects(ProjectsData),
    WorkExperience(WorkExperienceData),
    Milestones(Vec<Milestone>),
    Interests(Vec<Interest>),
    Now(NowData),
}

/// Every document at once, as the page loader hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub hero: HeroData,
    pub interests: Vec<Interest>,
    pub milestones: Vec<Milestone>,
    pub now: NowData,
    pub projects: ProjectsData,
    pub work_experience: WorkExperienceData,
}

/// Typed view of one [`Content`] variant.
pub trait Section: Sized {
    const DOCUMENT: Document;

    fn from_content(content: Content) -> Option<Self>;
}

impl Section for HeroData {
    const DOCUMENT: Document = Document::Hero;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::Hero(hero) => Some(hero),
            _ => None,
        }
    }
}

impl Section for ProjectsData {
    const DOCUMENT: Document = Document::Projects;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::Projects(projects) => Some(projects),
            _ => None,
        }
    }
}

impl Section for WorkExperienceData {
    const DOCUMENT: Document = Document::WorkExperience;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::WorkExperience(work) => Some(work),
            _ => None,
        }
    }
}

impl Section for Vec<Milestone> {
    const DOCUMENT: Document = Document::Milestones;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::Milestones(milestones) => Some(milestones),
            _ => None,
        }
    }
}

impl Section for Vec<Interest> {
    const DOCUMENT: Document = Document::Interests;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::Interests(interests) => Some(interests),
            _ => None,
        }
    }
}

impl Section for NowData {
    const DOCUMENT: Document = Document::Now;

    fn from_content(content: Content) -> Option<Self> {
        match content {
            Content::Now(now) => Some(now),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: &'static str, message: String },
    #[error("{file}: invalid {field}: {reason}")]
    Invalid {
        file: &'static str,
        field: String,
        reason: String,
    },
}

fn parse_json<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, DataError> {
    serde_json::from_str(raw).map_err(|e| DataError::Parse {
        file,
        message: e.to_string(),
    })
}

/// Parse `raw` as `document` and check it against the content schema.
pub fn parse_document(document: Document, raw: &str) -> Result<Content, DataError> {
    let file = document.file_name();
    let content = match document {
        Document::Hero => Content::Hero(parse_json(file, raw)?),
        Document::Projects => Content::Projects(parse_json(file, raw)?),
        Document::WorkExperience => Content::WorkExperience(parse_json(file, raw)?),
        Document::Milestones => Content::Milestones(parse_json(file, raw)?),
        Document::Interests => Content::Interests(parse_json(file, raw)?),
        Document::Now => Content::Now(parse_json(file, raw)?),
    };
    content
        .validate()
        .map_err(|violation| DataError::Invalid {
            file,
            field: violation.field,
            reason: violation.reason,
        })?;
    Ok(content)
}

/// Load an embedded document, memoised in [`GLOBAL_CONTENT_CACHE`].
pub fn load(document: Document) -> Result<Content, DataError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(content) = cache.get(&document) {
        return Ok(content.clone());
    }
    let file = document.file_name();
    let asset = DataFiles::get(file).ok_or(DataError::NotFound(file))?;
    let raw = std::str::from_utf8(&asset.data).map_err(|e| DataError::Parse {
        file,
        message: e.to_string(),
    })?;
    let content = parse_document(document, raw)?;
    cache.insert(document, content.clone());
    Ok(content)
}

pub fn load_section<T: Section>() -> Result<T, DataError> {
    let file = T::DOCUMENT.file_name();
    T::from_content(load(T::DOCUMENT)?).ok_or_else(|| DataError::Parse {
        file,
        message: "unexpected document kind".to_string(),
    })
}

pub fn load_site_data() -> Result<SiteData, DataError> {
    Ok(SiteData {
        hero: load_section()?,
        interests: load_section()?,
        milestones: load_section()?,
        now: load_section()?,
        projects: load_section()?,
        work_experience: load_section()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_document_loads() {
        for document in Document::ALL {
            let content = load(document);
            assert!(content.is_ok(), "{document}: {content:?}");
        }
    }

    #[test]
    fn test_work_experience_matches_published_data() {
        let work = load_section::<WorkExperienceData>().unwrap();
        assert_eq!(work.experiences.len(), 4);

        let first = &work.experiences[0];
        assert_eq!(first.company, "Crater Studios");
        assert_eq!(first.role, "Game Developer");
        assert_eq!(first.period, "Mar 2024 - Dec 2024");
        assert!(!first.achievements().is_empty());

        // optional fields fall back cleanly
        let last = work.experiences.last().unwrap();
        assert!(last.link.is_none());
        assert!(last.achievements().is_empty());
    }

    #[test]
    fn test_projects_keep_tech_order() {
        let projects = load_section::<ProjectsData>().unwrap();
        assert_eq!(projects.projects.len(), 6);
        assert_eq!(
            projects.projects[0].tech,
            vec!["React", "TypeScript", "Docker", "Kubernetes"]
        );
        assert!(projects.featured_project.case_study.is_some());
        assert_eq!(
            projects.projects[2].github.as_deref(),
            Some("https://github.com/chiptus/getupline")
        );
    }

    #[test]
    fn test_site_data_is_complete() {
        let site = load_site_data().unwrap();
        assert_eq!(site.hero.name, "Chaim Lev-Ari");
        assert!(!site.milestones.is_empty());
        assert!(!site.interests.is_empty());
        assert_eq!(site.now.learning.len(), 4);
    }

    #[test]
    fn test_cache_is_populated() {
        load(Document::Now).unwrap();
        assert!(GLOBAL_CONTENT_CACHE.contains_key(&Document::Now));
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let err = parse_document(Document::Now, r#"{"lastUpdated": "today"}"#).unwrap_err();
        match err {
            DataError::Parse { file, message } => {
                assert_eq!(file, "now.json");
                assert!(message.contains("currentWork"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let raw = r#"{
            "name": "N", "title": "T", "skills": "S", "description": "D",
            "social": {
                "github": "https://github.com/someone",
                "linkedin": "https://linkedin.com/in/someone",
                "email": "not-an-email"
            }
        }"#;
        let err = parse_document(Document::Hero, raw).unwrap_err();
        assert_eq!(
            err,
            DataError::Invalid {
                file: "hero.json",
                field: "social.email".to_string(),
                reason: "not a valid email address".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_project_link_is_rejected() {
        let raw = r#"{
            "featuredProject": {
                "name": "F", "description": "D", "tech": [], "image": "/f.jpg"
            },
            "projects": [
                { "name": "P", "description": "D", "tech": ["Rust"], "image": "/p.jpg", "link": "portainer.io" }
            ],
            "allTechs": ["Rust"]
        }"#;
        let err = parse_document(Document::Projects, raw).unwrap_err();
        assert!(matches!(
            err,
            DataError::Invalid { ref field, .. } if field == "projects[0].link"
        ));
    }

    #[test]
    fn test_social_links_strip_scheme() {
        let social = Social {
            github: "https://github.com/chiptus".to_string(),
            linkedin: "http://linkedin.com/in/chiptus".to_string(),
            email: "chiptus@gmail.com".to_string(),
        };
        let links = social.links();
        assert_eq!(links.len(), 3);

        assert_eq!(links[0].kind, SocialKind::Email);
        assert_eq!(links[0].kind.label(), "Email");
        assert_eq!(links[0].href, "mailto:chiptus@gmail.com");
        assert!(!links[0].is_external());

        assert_eq!(links[1].value, "github.com/chiptus");
        assert!(links[1].is_external());

        assert_eq!(links[2].value, "linkedin.com/in/chiptus");
        assert_eq!(links[2].href, "http://linkedin.com/in/chiptus");
    }

    #[test]
    fn test_milestone_icons_resolve() {
        let milestones = load_section::<Vec<Milestone>>().unwrap();
        assert_eq!(milestones[0].icon(), Icon::Terminal);
        assert_eq!(milestones.last().unwrap().icon(), Icon::Gamepad2);
    }
}
