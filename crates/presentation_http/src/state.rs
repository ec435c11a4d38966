//! Proxy state shared across handlers

use std::time::Duration;

use infrastructure::ProxyConfig;
use url::Url;

use crate::error::ProxyError;

/// Upstream connection settings
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub http: reqwest::Client,
    /// Backend origin, e.g. `http://127.0.0.1:8000`
    pub target: Url,
    /// Let the client set `Host` from the target instead of forwarding it
    pub change_origin: bool,
}

impl ProxyState {
    /// Build the state from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a valid URL or the HTTP client
    /// cannot be initialized.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ProxyError> {
        config.validate().map_err(ProxyError::InvalidTarget)?;
        let target =
            Url::parse(&config.target).map_err(|e| ProxyError::InvalidTarget(e.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            // Redirects are the browser's business
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::InvalidTarget(e.to_string()))?;

        Ok(Self {
            http,
            target,
            change_origin: config.change_origin,
        })
    }

    /// Target origin plus the original path and query
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL does not parse.
    pub fn upstream_url(&self, path_and_query: &str) -> Result<Url, ProxyError> {
        let origin = self.target.as_str().trim_end_matches('/');
        Url::parse(&format!("{origin}{path_and_query}"))
            .map_err(|e| ProxyError::InvalidTarget(e.to_string()))
    }
}
