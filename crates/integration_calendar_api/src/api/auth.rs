use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use crate::{
    client::CalendarApiClient,
    envelope::{ApiResponse, LoginSession},
    error::ApiError,
    token::duplicate_secret,
};

/// `/auth` endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Sign in with an account id, creating the account on first use
    ///
    /// A successful response carrying a non-empty token replaces the held
    /// token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token cannot be persisted.
    #[instrument(skip(self))]
    pub async fn login(&self, account_id: &str) -> Result<ApiResponse<LoginSession>, ApiError> {
        let response: ApiResponse<LoginSession> = self
            .client
            .send_json(Method::POST, &["auth", "login"], &json!({ "account_id": account_id }))
            .await?;

        match response.data.as_ref().filter(|_| response.success) {
            Some(session) if !session.access_token.expose_secret().is_empty() => {
                self.client
                    .set_access_token(Some(duplicate_secret(&session.access_token)))?;
                info!(is_new_user = session.is_new_user, "Signed in");
            },
            Some(_) => warn!("Login response carried an empty token; keeping the held token"),
            None => {},
        }
        Ok(response)
    }

    /// Sign out; the held token is cleared even when the request fails
    ///
    /// # Errors
    ///
    /// Returns the request error if the call failed, otherwise an error if
    /// clearing the persisted token failed.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<ApiResponse<Value>, ApiError> {
        let result = self
            .client
            .send_empty(Method::POST, &["auth", "logout"])
            .await;

        let cleared = self.client.set_access_token(None);
        if let Err(err) = &cleared {
            warn!(error = %err, "Failed to clear stored token");
        }

        let response = result?;
        cleared?;
        Ok(response)
    }
}
