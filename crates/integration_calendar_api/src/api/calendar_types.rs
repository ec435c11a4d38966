use domain::{CalendarType, CalendarTypeDraft, CalendarTypeUpdate, TypeDeletion};
use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use crate::{client::CalendarApiClient, envelope::ApiResponse, error::ApiError};

/// `/calendar-types` endpoints; types are addressed by their `type_id` slug
#[derive(Debug, Clone, Copy)]
pub struct CalendarTypesApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> CalendarTypesApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<ApiResponse<Vec<CalendarType>>, ApiError> {
        self.client.get(&["calendar-types"], None).await
    }

    /// Create a type; the draft is length-checked before sending
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` for an invalid draft, or an error if
    /// the request fails.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        draft: &CalendarTypeDraft,
    ) -> Result<ApiResponse<CalendarType>, ApiError> {
        draft.check()?;
        self.client
            .send_json(Method::POST, &["calendar-types"], draft)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        type_id: &str,
        update: &CalendarTypeUpdate,
    ) -> Result<ApiResponse<CalendarType>, ApiError> {
        self.client
            .send_json(Method::PUT, &["calendar-types", type_id], update)
            .await
    }

    /// Show or hide a type's events
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn set_visibility(
        &self,
        type_id: &str,
        is_visible: bool,
    ) -> Result<ApiResponse<CalendarType>, ApiError> {
        self.client
            .send_json(
                Method::PATCH,
                &["calendar-types", type_id, "visibility"],
                &json!({ "is_visible": is_visible }),
            )
            .await
    }

    /// Delete a type; its events move to `general`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, including the backend's refusal
    /// to delete a protected type.
    #[instrument(skip(self))]
    pub async fn delete(&self, type_id: &str) -> Result<ApiResponse<TypeDeletion>, ApiError> {
        self.client
            .send_empty(Method::DELETE, &["calendar-types", type_id])
            .await
    }
}
