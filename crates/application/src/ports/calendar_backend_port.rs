//! Calendar backend port
//!
//! The data the agenda needs from the calendar backend. Implemented in the
//! infrastructure layer on top of the REST client.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{CalendarType, CompletionState, Event, EventId, Reminder};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Calendar backend port errors
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Request refused (4xx other than 401/404)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for reading the user's calendar
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CalendarBackendPort: Send + Sync {
    /// Events dated between `start` and `end`, both inclusive
    async fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, BackendError>;

    /// All calendar types of the user, visible or not
    async fn calendar_types(&self) -> Result<Vec<CalendarType>, BackendError>;

    /// Reminder cards for `date`, or for the backend's today
    async fn reminders(&self, date: Option<NaiveDate>) -> Result<Vec<Reminder>, BackendError>;

    /// Mark an event done or not done
    async fn set_completed(
        &self,
        id: EventId,
        completed: bool,
    ) -> Result<CompletionState, BackendError>;
}
