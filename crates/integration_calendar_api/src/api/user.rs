use domain::{GeoLocation, LocationReport, UserLocation, UserProfile, UserUpdate};
use reqwest::Method;
use tracing::instrument;

use crate::{client::CalendarApiClient, envelope::ApiResponse, error::ApiError};

/// `/user` endpoints
#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Profile of the signed-in user
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<ApiResponse<UserProfile>, ApiError> {
        self.client.get(&["user"], None).await
    }

    /// Update saved addresses
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update(&self, update: &UserUpdate) -> Result<ApiResponse<UserProfile>, ApiError> {
        self.client.send_json(Method::PUT, &["user"], update).await
    }

    /// Last reported position; `data` is absent when none was reported
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn location(&self) -> Result<ApiResponse<UserLocation>, ApiError> {
        self.client.get(&["user", "location"], None).await
    }

    /// Report the device position
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update_location(
        &self,
        position: GeoLocation,
        accuracy: Option<f64>,
    ) -> Result<ApiResponse<UserLocation>, ApiError> {
        let report = LocationReport::new(position, accuracy);
        self.client
            .send_json(Method::POST, &["user", "location"], &report)
            .await
    }
}
