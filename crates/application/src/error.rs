//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backend could not be reached or failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The backend rejected the access token
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend refused the request as invalid
    #[error("Rejected: {0}")]
    Rejected(String),
}

impl ApplicationError {
    /// Whether signing in again could resolve this error
    #[must_use]
    pub const fn needs_login(&self) -> bool {
        matches!(self, Self::NotAuthorized(_))
    }
}
