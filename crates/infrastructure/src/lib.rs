//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the calendar REST client and
//! carries configuration loading, token persistence and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

use std::sync::Arc;

use integration_calendar_api::{
    ApiError, CalendarApiClient, MemoryTokenStore, TokenStore,
};

pub use adapters::*;
pub use config::{AppConfig, LogConfig, LogFormat, ProxyConfig, TokenConfig};
pub use telemetry::{TelemetryError, init_logging};

/// Token store selected by the configuration
#[must_use]
pub fn token_store(config: &TokenConfig) -> Arc<dyn TokenStore> {
    match &config.path {
        Some(path) => Arc::new(FileTokenStore::new(path)),
        None => Arc::new(MemoryTokenStore::new()),
    }
}

/// API client wired to the configured token store
///
/// # Errors
///
/// Returns an error if the API configuration is invalid.
pub fn api_client(config: &AppConfig) -> Result<CalendarApiClient, ApiError> {
    CalendarApiClient::with_token_store(&config.api, token_store(&config.token))
}
