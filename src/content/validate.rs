use http::Uri;
use regex::Regex;
use std::sync::LazyLock;

use super::{
    Content, HeroData, Project, ProjectsData, WorkExperienceData, WorkExperienceItem,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    fn new(field: impl Into<String>, reason: &str) -> Self {
        Self {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), Violation>;
}

/// Absolute `http`/`https` URL with a host.
fn check_url(field: impl Into<String>, value: &str) -> Result<(), Violation> {
    let valid = value.parse::<Uri>().is_ok_and(|uri| {
        matches!(uri.scheme_str(), Some("http") | Some("https")) && uri.authority().is_some()
    });
    if valid {
        Ok(())
    } else {
        Err(Violation::new(field, "not an absolute http(s) URL"))
    }
}

fn check_optional_url(field: impl Into<String>, value: Option<&str>) -> Result<(), Violation> {
    match value {
        Some(url) => check_url(field, url),
        None => Ok(()),
    }
}

fn check_email(field: &str, value: &str) -> Result<(), Violation> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(Violation::new(field, "not a valid email address"))
    }
}

impl Validate for HeroData {
    fn validate(&self) -> Result<(), Violation> {
        check_url("social.github", &self.social.github)?;
        check_url("social.linkedin", &self.social.linkedin)?;
        check_email("social.email", &self.social.email)
    }
}

fn check_project(prefix: &str, project: &Project) -> Result<(), Violation> {
    check_optional_url(format!("{prefix}.link"), project.link.as_deref())?;
    check_optional_url(format!("{prefix}.github"), project.github.as_deref())
}

impl Validate for ProjectsData {
    fn validate(&self) -> Result<(), Violation> {
        check_project("featuredProject", &self.featured_project)?;
        for (i, project) in self.projects.iter().enumerate() {
            check_project(&format!("projects[{i}]"), project)?;
        }
        Ok(())
    }
}

fn check_work_item(i: usize, item: &WorkExperienceItem) -> Result<(), Violation> {
    check_optional_url(format!("experiences[{i}].link"), item.link.as_deref())
}

impl Validate for WorkExperienceData {
    fn validate(&self) -> Result<(), Violation> {
        self.experiences
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_work_item(i, item))
    }
}

impl Validate for Content {
    fn validate(&self) -> Result<(), Violation> {
        match self {
            Content::Hero(hero) => hero.validate(),
            Content::Projects(projects) => projects.validate(),
            Content::WorkExperience(work) => work.validate(),
            // plain strings only
            Content::Milestones(_) | Content::Interests(_) | Content::Now(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert!(check_url("f", "https://www.portainer.io").is_ok());
        assert!(check_url("f", "http://linkedin.com/in/chiptus").is_ok());
        assert!(check_url("f", "portainer.io").is_err());
        assert!(check_url("f", "ftp://files.example.com").is_err());
        assert!(check_url("f", "/relative/path").is_err());
        assert!(check_url("f", "").is_err());
    }

    #[test]
    fn test_emails() {
        assert!(check_email("f", "chiptus@gmail.com").is_ok());
        assert!(check_email("f", "first.last@sub.example.org").is_ok());
        assert!(check_email("f", "chiptus").is_err());
        assert!(check_email("f", "chiptus@gmail").is_err());
        assert!(check_email("f", "two words@example.com").is_err());
    }

    #[test]
    fn test_violation_names_field() {
        let err = check_optional_url("projects[3].link", Some("nope")).unwrap_err();
        assert_eq!(err.field, "projects[3].link");
        assert!(check_optional_url("projects[3].link", None).is_ok());
    }
}
