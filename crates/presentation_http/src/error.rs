//! Proxy error handling
//!
//! Errors are rendered in the backend's envelope shape so the frontend can
//! treat proxy failures like any other API error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Proxy error type
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Blocked request. Host '{0}' is not allowed")]
    HostNotAllowed(String),

    /// The backend could not be reached or its response could not be read
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Invalid request body: {0}")]
    Body(String),

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Invalid upstream target: {0}")]
    InvalidTarget(String),
}

/// Error envelope body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl ProxyError {
    /// Status code and machine-readable code
    #[must_use]
    pub const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::HostNotAllowed(_) => (StatusCode::FORBIDDEN, "HOST_NOT_ALLOWED"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
            Self::Body(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            Self::InvalidTarget(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
