use domain::{Commute, CommutePlace};
use tracing::instrument;

use crate::{
    client::CalendarApiClient, envelope::ApiResponse, error::ApiError, query::encode_pairs,
};

/// `/location/commute` endpoint
#[derive(Debug, Clone, Copy)]
pub struct CommuteApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> CommuteApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Routes between two saved places
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        from: CommutePlace,
        to: CommutePlace,
    ) -> Result<ApiResponse<Commute>, ApiError> {
        let query = encode_pairs(&[("from", from.as_str()), ("to", to.as_str())]);
        self.client
            .get(&["location", "commute"], query.as_deref())
            .await
    }

    /// Home to school, the default direction
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn home_to_school(&self) -> Result<ApiResponse<Commute>, ApiError> {
        self.get(CommutePlace::Home, CommutePlace::School).await
    }
}
