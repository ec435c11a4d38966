use domain::ServerTime;
use tracing::instrument;

use crate::{client::CalendarApiClient, envelope::ApiResponse, error::ApiError};

/// `/time` endpoint
#[derive(Debug, Clone, Copy)]
pub struct TimeApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> TimeApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Current server time; needs no token
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn server_time(&self) -> Result<ApiResponse<ServerTime>, ApiError> {
        self.client.get(&["time"], None).await
    }
}
