//! Application configuration
//!
//! Split into focused sub-modules:
//! - `proxy`: development proxy server settings
//! - `token`: where the access token is persisted
//! - `log`: log filter and output format
//!
//! The API client settings come from `integration_calendar_api`.

mod log;
mod proxy;
mod token;

use std::path::Path;

use integration_calendar_api::{CalendarApiConfig, LegacyApiConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use log::{LogConfig, LogFormat};
pub use proxy::ProxyConfig;
pub use token::TokenConfig;

/// Prefix of environment overrides, e.g. `JARVIS_PROXY__PORT=8080`
pub const ENV_PREFIX: &str = "JARVIS";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Versioned backend API
    #[serde(default)]
    pub api: CalendarApiConfig,

    /// Older unversioned API
    #[serde(default)]
    pub legacy: LegacyApiConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub token: TokenConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, or `config.toml` when `None`
    ///
    /// `JARVIS_API_URL` takes precedence over every other source for the API
    /// base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or a source cannot be
    /// parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("api.base_url", "http://localhost:8000/api/v1")?
            .set_default("proxy.port", 5173)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., JARVIS_PROXY__TARGET)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("proxy.allowed_hosts"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.api = config.api.with_env_override();
        debug!(base_url = %config.api.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate().map_err(|e| format!("api: {e}"))?;
        self.proxy.validate().map_err(|e| format!("proxy: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.legacy.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn loads_sections_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
timeout_secs = 12

[proxy]
port = 8080
target = "http://127.0.0.1:9000"
allowed_hosts = [".example.dev", "preview.local"]

[log]
filter = "debug"
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(config.proxy.port, 8080);
        assert_eq!(config.proxy.target, "http://127.0.0.1:9000");
        assert_eq!(config.proxy.allowed_hosts, [".example.dev", "preview.local"]);
        assert!(config.proxy.change_origin);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_from(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_section_is_reported() {
        let config = AppConfig {
            proxy: ProxyConfig {
                target: "nonsense".to_string(),
                ..ProxyConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(config.validate().unwrap_err().starts_with("proxy:"));
    }
}
