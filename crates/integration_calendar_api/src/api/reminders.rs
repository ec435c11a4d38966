use chrono::NaiveDate;
use domain::Reminder;
use tracing::instrument;

use crate::{
    client::CalendarApiClient, envelope::ApiResponse, error::ApiError, query::encode_pairs,
};

/// `/reminders` endpoint
#[derive(Debug, Clone, Copy)]
pub struct RemindersApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> RemindersApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Reminder cards for `date`, or for the server's today
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, date: Option<NaiveDate>) -> Result<ApiResponse<Vec<Reminder>>, ApiError> {
        let pairs: Vec<(&str, String)> = date.map(|d| ("date", d.to_string())).into_iter().collect();
        let query = encode_pairs(&pairs);
        self.client.get(&["reminders"], query.as_deref()).await
    }
}
