//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` wins over
//! the configured filter.

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, LogFormat};

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },
}

/// Build the filter from `RUST_LOG`, falling back to `fallback`
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is unset and `fallback` is not a valid
/// directive.
pub fn env_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(fallback).map_err(|e| TelemetryError::Filter {
            filter: fallback.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %config.filter, format = %config.format, "Logging initialized");
    Ok(())
}
