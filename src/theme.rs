use serde::{Deserialize, Serialize};
use std::fmt;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Applies the stored theme before hydration so a reload never flashes the wrong palette.
/// Unknown or missing values settle on light and are written back.
pub const THEME_BOOT_SCRIPT: &str = r#"(function () {
  var theme = null;
  try { theme = JSON.parse(localStorage.getItem("theme")); } catch (e) {}
  if (theme !== "dark") { theme = "light"; }
  localStorage.setItem("theme", JSON.stringify(theme));
  var classes = document.documentElement.classList;
  classes.remove("light", "dark");
  classes.add(theme);
})();"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the document element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: the moon offers dark mode, the sun offers light mode.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "icon-moon",
            Theme::Dark => "icon-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        for expected in [Theme::Dark, Theme::Light, Theme::Dark] {
            theme = theme.toggled();
            assert_eq!(theme, expected);
            // exactly one class name is ever produced
            assert_eq!(
                Theme::ALL
                    .iter()
                    .filter(|t| t.as_str() == theme.as_str())
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_persisted_form_is_json_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Light.toggle_icon(), "icon-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "icon-sun");
    }
}
