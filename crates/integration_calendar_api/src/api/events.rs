use domain::{CompletionState, Event, EventDraft, EventId, EventLinks, EventList, EventUpdate};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::instrument;

use crate::{
    client::CalendarApiClient, envelope::ApiResponse, error::ApiError, query::EventQuery,
};

/// `/events` endpoints
#[derive(Debug, Clone, Copy)]
pub struct EventsApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Events matching `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &EventQuery) -> Result<ApiResponse<EventList>, ApiError> {
        let query = query.to_query_string();
        self.client.get(&["events"], query.as_deref()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get(&self, id: EventId) -> Result<ApiResponse<Event>, ApiError> {
        let id = id.to_string();
        self.client.get(&["events", &id], None).await
    }

    /// Create an event; the draft is validated before sending
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` for an invalid draft, or an error if
    /// the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title, date = %draft.date))]
    pub async fn create(&self, draft: &EventDraft) -> Result<ApiResponse<Event>, ApiError> {
        draft.check()?;
        self.client.send_json(Method::POST, &["events"], draft).await
    }

    /// Apply a partial update
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: EventId,
        update: &EventUpdate,
    ) -> Result<ApiResponse<Event>, ApiError> {
        let id = id.to_string();
        self.client
            .send_json(Method::PUT, &["events", &id], update)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EventId) -> Result<ApiResponse<Value>, ApiError> {
        let id = id.to_string();
        self.client.send_empty(Method::DELETE, &["events", &id]).await
    }

    /// Mark an event done or not done
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn set_completed(
        &self,
        id: EventId,
        completed: bool,
    ) -> Result<ApiResponse<CompletionState>, ApiError> {
        let id = id.to_string();
        self.client
            .send_json(
                Method::PATCH,
                &["events", &id, "complete"],
                &json!({ "completed": completed }),
            )
            .await
    }

    /// Attach a link; returns the event's full link list
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn add_link(&self, id: EventId, url: &str) -> Result<ApiResponse<EventLinks>, ApiError> {
        let id = id.to_string();
        self.client
            .send_json(Method::POST, &["events", &id, "links"], &json!({ "url": url }))
            .await
    }

    /// Detach a link; returns the remaining links
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn remove_link(
        &self,
        id: EventId,
        url: &str,
    ) -> Result<ApiResponse<EventLinks>, ApiError> {
        let id = id.to_string();
        self.client
            .send_json(Method::DELETE, &["events", &id, "links"], &json!({ "url": url }))
            .await
    }
}
