//! Client configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "JARVIS_API_URL";

/// Configuration for the calendar REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarApiConfig {
    /// Base URL including the version prefix, e.g. `http://localhost:8000/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("jarvis-calendar/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CalendarApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl CalendarApiConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Point the client at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Apply `JARVIS_API_URL` if it is set to a non-empty value
    #[must_use]
    pub fn with_env_override(self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url '{}' is not a valid URL: {e}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("base_url must use http or https, got '{}'", url.scheme()));
        }
        if url.cannot_be_a_base() {
            return Err("base_url cannot carry a path".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the older unversioned API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyApiConfig {
    #[serde(default = "default_legacy_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_legacy_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

impl Default for LegacyApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_legacy_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CalendarApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("jarvis-calendar/"));
        assert!(config.validate().is_ok());

        assert_eq!(LegacyApiConfig::default().base_url, "http://localhost:3000/api");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CalendarApiConfig =
            serde_json::from_str(r#"{"base_url": "https://jarvis.example/api/v1"}"#).unwrap();
        assert_eq!(config.base_url, "https://jarvis.example/api/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn validate_rejects_bad_urls() {
        let bad = CalendarApiConfig::for_testing().with_base_url("not a url");
        assert!(bad.validate().is_err());

        let ftp = CalendarApiConfig::for_testing().with_base_url("ftp://host/api");
        assert!(ftp.validate().unwrap_err().contains("http"));

        let mailto = CalendarApiConfig::for_testing().with_base_url("mailto:someone@example.com");
        assert!(mailto.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = CalendarApiConfig {
            timeout_secs: 0,
            ..CalendarApiConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("timeout"));
    }
}
