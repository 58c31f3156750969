use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwAsOEjtJcp8HNtdgMD3QIfGrZjVfB_ME0JMFMDb9YrusxGDCo/exec";
const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidEndpoint { name: &'static str, value: String },
}

/// Site settings that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub contact_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            contact_timeout: Duration::from_secs(DEFAULT_CONTACT_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup("CONTACT_ENDPOINT") {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                return Err(ConfigError::InvalidEndpoint {
                    name: "CONTACT_ENDPOINT",
                    value,
                });
            }
            config.contact_endpoint = value;
        }
        if let Some(value) = lookup("CONTACT_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: "CONTACT_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            config.contact_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CONTACT_ENDPOINT", "http://localhost:9000/contact"),
            ("CONTACT_TIMEOUT_SECS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.contact_endpoint, "http://localhost:9000/contact");
        assert_eq!(config.contact_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SiteConfig::from_lookup(lookup(&[("CONTACT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

        let err = SiteConfig::from_lookup(lookup(&[("CONTACT_ENDPOINT", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
