//! Calendar API adapter - Implements CalendarBackendPort using integration_calendar_api

use std::sync::Arc;

use application::ports::{BackendError, CalendarBackendPort};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{CalendarType, CompletionState, Event, EventId, Reminder};
use integration_calendar_api::{ApiError, CalendarApiClient, EventQuery};
use tracing::{debug, instrument};

/// Adapter serving the agenda from the calendar REST API
pub struct CalendarApiAdapter {
    client: Arc<CalendarApiClient>,
}

impl std::fmt::Debug for CalendarApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarApiAdapter")
            .field("base_url", &self.client.base_url().as_str())
            .finish()
    }
}

impl CalendarApiAdapter {
    /// Wrap a shared client
    pub const fn new(client: Arc<CalendarApiClient>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &CalendarApiClient {
        &self.client
    }
}

/// Map client errors onto port errors
fn map_api_error(err: ApiError) -> BackendError {
    match err.status() {
        Some(401) => return BackendError::AuthenticationFailed,
        Some(404) => {
            return BackendError::NotFound(err.error_message().unwrap_or("resource").to_string());
        },
        Some(status) if status < 500 => {
            return BackendError::Rejected(
                err.error_message()
                    .map_or_else(|| err.to_string(), str::to_string),
            );
        },
        _ => {},
    }

    match err {
        ApiError::Parse(_) | ApiError::MissingData(_) => {
            BackendError::InvalidResponse(err.to_string())
        },
        ApiError::InvalidRequest(msg) => BackendError::Rejected(msg),
        other => BackendError::Unavailable(other.to_string()),
    }
}

#[async_trait]
impl CalendarBackendPort for CalendarApiAdapter {
    #[instrument(skip(self))]
    async fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, BackendError> {
        let list = self
            .client
            .events()
            .list(&EventQuery::for_range(start, end))
            .await
            .and_then(|r| r.into_data("events"))
            .map_err(map_api_error)?;
        debug!(count = list.events.len(), total = list.total, "Loaded events");
        Ok(list.events)
    }

    #[instrument(skip(self))]
    async fn calendar_types(&self) -> Result<Vec<CalendarType>, BackendError> {
        self.client
            .calendar_types()
            .list()
            .await
            .and_then(|r| r.into_data("calendar-types"))
            .map_err(map_api_error)
    }

    #[instrument(skip(self))]
    async fn reminders(&self, date: Option<NaiveDate>) -> Result<Vec<Reminder>, BackendError> {
        self.client
            .reminders()
            .list(date)
            .await
            .and_then(|r| r.into_data("reminders"))
            .map_err(map_api_error)
    }

    #[instrument(skip(self), fields(event_id = %id))]
    async fn set_completed(
        &self,
        id: EventId,
        completed: bool,
    ) -> Result<CompletionState, BackendError> {
        self.client
            .events()
            .set_completed(id, completed)
            .await
            .and_then(|r| r.into_data("events/complete"))
            .map_err(map_api_error)
    }
}
