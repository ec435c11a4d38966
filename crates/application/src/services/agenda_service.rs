//! Agenda service
//!
//! Loads the events behind a month grid, hides events of invisible calendar
//! types and groups the rest by day.

use std::{collections::HashSet, fmt, sync::Arc};

use chrono::NaiveDate;
use domain::{CalendarView, CompletionState, Event, Reminder, WeekStart};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{BackendError, CalendarBackendPort},
};

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// All-day events first, then by start time
    pub events: Vec<Event>,
}

impl AgendaDay {
    /// Events not yet completed
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.events.iter().filter(|e| !e.completed).count()
    }
}

/// A month grid with its events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthAgenda {
    /// e.g. `March 2026`
    pub title: String,
    pub week_start: WeekStart,
    pub days: Vec<AgendaDay>,
    /// Calendar types whose events were left out
    pub hidden_types: Vec<String>,
}

impl MonthAgenda {
    /// Rows of seven days
    pub fn weeks(&self) -> impl Iterator<Item = &[AgendaDay]> {
        self.days.chunks(7)
    }

    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&AgendaDay> {
        self.days.iter().find(|d| d.date == date)
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }
}

/// Service behind the month view
pub struct AgendaService {
    backend: Arc<dyn CalendarBackendPort>,
}

impl fmt::Debug for AgendaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgendaService").finish_non_exhaustive()
    }
}

impl AgendaService {
    /// Create a new agenda service
    pub fn new(backend: Arc<dyn CalendarBackendPort>) -> Self {
        Self { backend }
    }

    /// Events for every day of the view's grid
    ///
    /// # Errors
    ///
    /// Returns an error if events or calendar types cannot be loaded.
    #[instrument(skip(self, view), fields(month = %view.title()))]
    pub async fn month_agenda(
        &self,
        view: &CalendarView,
        today: NaiveDate,
    ) -> Result<MonthAgenda, ApplicationError> {
        let (start, end) = (view.grid_start(), view.grid_end());
        let (events, types) = tokio::try_join!(
            self.backend.events_in_range(start, end),
            self.backend.calendar_types(),
        )
        .map_err(map_error)?;

        let hidden: HashSet<&str> = types
            .iter()
            .filter(|t| !t.is_visible)
            .map(|t| t.type_id.as_str())
            .collect();

        let loaded = events.len();
        let visible: Vec<Event> = events
            .into_iter()
            .filter(|e| e.type_id.as_deref().is_none_or(|t| !hidden.contains(t)))
            .collect();
        debug!(loaded, visible = visible.len(), "Filtered hidden calendar types");

        let days = view
            .days()
            .into_iter()
            .map(|date| {
                let mut events: Vec<Event> =
                    visible.iter().filter(|e| e.date == date).cloned().collect();
                events.sort_by(Event::cmp_within_day);
                AgendaDay {
                    date,
                    in_current_month: view.is_same_month(date),
                    is_today: view.is_today(date, today),
                    is_selected: view.is_selected(date),
                    events,
                }
            })
            .collect();

        let mut hidden_types: Vec<String> = hidden.into_iter().map(str::to_string).collect();
        hidden_types.sort();

        Ok(MonthAgenda {
            title: view.title(),
            week_start: view.week_start(),
            days,
            hidden_types,
        })
    }

    /// Flip an event between done and not done
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the change.
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    pub async fn toggle_completed(&self, event: &Event) -> Result<CompletionState, ApplicationError> {
        let completed = !event.completed;
        info!(completed, "Toggling event completion");
        self.backend
            .set_completed(event.id, completed)
            .await
            .map_err(map_error)
    }

    /// Reminder cards for a day
    ///
    /// # Errors
    ///
    /// Returns an error if reminders cannot be loaded.
    #[instrument(skip(self))]
    pub async fn reminders_for(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Reminder>, ApplicationError> {
        self.backend.reminders(date).await.map_err(map_error)
    }
}

fn map_error(err: BackendError) -> ApplicationError {
    match err {
        BackendError::Unavailable(msg) | BackendError::InvalidResponse(msg) => {
            ApplicationError::ExternalService(msg)
        },
        BackendError::AuthenticationFailed => {
            ApplicationError::NotAuthorized("Calendar backend rejected the token".to_string())
        },
        BackendError::NotFound(what) => ApplicationError::NotFound(what),
        BackendError::Rejected(msg) => ApplicationError::Rejected(msg),
    }
}
