//! Client for the older unversioned API
//!
//! Five fixed endpoints, no authentication and no envelope handling: the
//! response body is returned as raw JSON.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{config::LegacyApiConfig, error::ApiError};

/// Thin client over `/events`, `/calendar-types` and `/reminders`
#[derive(Debug, Clone)]
pub struct LegacyApiClient {
    http: Client,
    base_url: String,
    timeout_secs: u64,
}

impl LegacyApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &LegacyApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Value, ApiError> {
        self.execute(Method::GET, "/events", None).await
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self, event))]
    pub async fn create_event(&self, event: &Value) -> Result<Value, ApiError> {
        self.execute(Method::POST, "/events", Some(event)).await
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self))]
    pub async fn get_calendar_types(&self) -> Result<Value, ApiError> {
        self.execute(Method::GET, "/calendar-types", None).await
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self, calendar_type))]
    pub async fn create_calendar_type(&self, calendar_type: &Value) -> Result<Value, ApiError> {
        self.execute(Method::POST, "/calendar-types", Some(calendar_type))
            .await
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self))]
    pub async fn get_reminders(&self) -> Result<Value, ApiError> {
        self.execute(Method::GET, "/reminders", None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%method, ?url, "Legacy API request");

        let mut request: RequestBuilder = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                ApiError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, ?url, "Legacy API error response");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&text).unwrap_or(Value::String(text)),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
