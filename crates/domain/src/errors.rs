//! Domain-level errors

use thiserror::Error;

/// Errors raised while building or parsing domain values
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// A draft or update failed field validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Not a `YYYY-MM-DD` date or `HH:MM` time
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}
