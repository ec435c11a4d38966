//! Calendar API error types

use serde_json::Value;
use thiserror::Error;

use crate::token::TokenStoreError;

/// Errors that can occur while talking to the calendar backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {}", summarize(.body))]
    Status {
        status: u16,
        /// Parsed JSON body, or the raw text as a JSON string
        body: Value,
    },

    /// A 2xx response body that is not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request could not be built from the given input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A successful envelope without the `data` the caller needs
    #[error("Response from {0} carried no data")]
    MissingData(String),

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

fn summarize(body: &Value) -> String {
    match body {
        Value::String(text) if text.is_empty() => "<empty body>".to_string(),
        Value::String(text) => text.clone(),
        other => error_field(other, "message")
            .or_else(|| other.get("message").and_then(Value::as_str))
            .map_or_else(|| other.to_string(), str::to_string),
    }
}

fn error_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get("error")?.get(field)?.as_str()
}

impl ApiError {
    /// HTTP status of a `Status` error
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed response body of a `Status` error
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Backend error code such as `VALIDATION_ERROR` or `FILE_TOO_LARGE`
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.body().and_then(|body| error_field(body, "code"))
    }

    /// Backend error message
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        let body = self.body()?;
        error_field(body, "message")
            .or_else(|| body.get("message").and_then(Value::as_str))
            .or_else(|| body.as_str())
    }

    /// Field-level details attached to a validation error
    #[must_use]
    pub fn error_details(&self) -> Option<&Value> {
        self.body()?.get("error")?.get("details")
    }

    /// Whether the backend rejected the access token
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<domain::DomainError> for ApiError {
    fn from(err: domain::DomainError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
