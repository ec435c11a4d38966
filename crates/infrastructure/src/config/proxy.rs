//! Development proxy server configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use super::default_true;

/// Settings for the development proxy in front of the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Backend origin requests are forwarded to
    #[serde(default = "default_target")]
    pub target: String,

    /// Path prefix that is forwarded
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Rewrite the forwarded `Host` header to the target
    #[serde(default = "default_true")]
    pub change_origin: bool,

    /// Extra accepted `Host` values; a leading `.` accepts any subdomain
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,

    /// Directory with the built frontend, served for non-API paths
    #[serde(default)]
    pub static_dir: Option<String>,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5173
}

fn default_target() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_allowed_hosts() -> Vec<String> {
    vec![".trycloudflare.com".to_string()]
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            target: default_target(),
            api_prefix: default_api_prefix(),
            change_origin: true,
            allowed_hosts: default_allowed_hosts(),
            static_dir: None,
            cors_enabled: true,
        }
    }
}

impl ProxyConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Default::default()
        }
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not an absolute http(s) origin or the
    /// API prefix is not a non-root absolute path.
    pub fn validate(&self) -> Result<(), String> {
        let target = Url::parse(&self.target)
            .map_err(|e| format!("proxy target '{}' is not a valid URL: {e}", self.target))?;
        if !matches!(target.scheme(), "http" | "https") || target.host_str().is_none() {
            return Err(format!("proxy target '{}' must be an http(s) origin", self.target));
        }
        if !self.api_prefix.starts_with('/') || self.api_prefix.trim_matches('/').is_empty() {
            return Err(format!(
                "api_prefix '{}' must start with '/' and name a path",
                self.api_prefix
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dev_setup() {
        let config = ProxyConfig::default();
        assert_eq!(config.target, "http://127.0.0.1:8000");
        assert_eq!(config.api_prefix, "/api/v1");
        assert!(config.change_origin);
        assert_eq!(config.allowed_hosts, [".trycloudflare.com"]);
        assert_eq!(config.bind_address(), "0.0.0.0:5173");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_target_and_prefix() {
        let config = ProxyConfig {
            target: "localhost:8000".to_string(),
            ..ProxyConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ProxyConfig {
            api_prefix: "api".to_string(),
            ..ProxyConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("api_prefix"));

        let config = ProxyConfig {
            api_prefix: "/".to_string(),
            ..ProxyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
