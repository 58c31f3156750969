use serde::{Deserialize, Serialize};

/// Icons that content documents may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Terminal,
    Brain,
    Rocket,
    Sparkles,
    Code,
    Heart,
    Camera,
    Mountain,
    Book,
    Briefcase,
    Music,
    Coffee,
    Gamepad2,
    Flower2,
    BookOpen,
}

const ICONS: [(&str, Icon); 15] = [
    ("Terminal", Icon::Terminal),
    ("Brain", Icon::Brain),
    ("Rocket", Icon::Rocket),
    ("Sparkles", Icon::Sparkles),
    ("Code", Icon::Code),
    ("Heart", Icon::Heart),
    ("Camera", Icon::Camera),
    ("Mountain", Icon::Mountain),
    ("Book", Icon::Book),
    ("Briefcase", Icon::Briefcase),
    ("Music", Icon::Music),
    ("Coffee", Icon::Coffee),
    ("Gamepad2", Icon::Gamepad2),
    ("Flower2", Icon::Flower2),
    ("BookOpen", Icon::BookOpen),
];

impl Icon {
    pub fn lookup(name: &str) -> Option<Icon> {
        ICONS
            .iter()
            .find_map(|(n, icon)| if *n == name { Some(*icon) } else { None })
    }

    /// Resolve an icon name, falling back to [`Icon::Code`].
    pub fn from_name(name: &str) -> Icon {
        Self::lookup(name).unwrap_or_else(|| {
            log::warn!("Icon \"{name}\" not found, using default");
            Icon::Code
        })
    }

    /// Class name in the icon font stylesheet.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Terminal => "icon-terminal",
            Icon::Brain => "icon-brain",
            Icon::Rocket => "icon-rocket",
            Icon::Sparkles => "icon-sparkles",
            Icon::Code => "icon-code",
            Icon::Heart => "icon-heart",
            Icon::Camera => "icon-camera",
            Icon::Mountain => "icon-mountain",
            Icon::Book => "icon-book",
            Icon::Briefcase => "icon-briefcase",
            Icon::Music => "icon-music",
            Icon::Coffee => "icon-coffee",
            Icon::Gamepad2 => "icon-gamepad-2",
            Icon::Flower2 => "icon-flower-2",
            Icon::BookOpen => "icon-book-open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for (name, icon) in ICONS {
            assert_eq!(Icon::lookup(name), Some(icon));
            assert!(icon.class().starts_with("icon-"));
        }
    }

    #[test]
    fn test_unknown_falls_back_to_code() {
        assert_eq!(Icon::lookup("Unicorn"), None);
        assert_eq!(Icon::from_name("Unicorn"), Icon::Code);
        // names are case sensitive
        assert_eq!(Icon::from_name("terminal"), Icon::Code);
    }
}
