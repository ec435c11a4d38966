//! HTTP client for the calendar backend
//!
//! Builds endpoint URLs from the configured base URL, attaches the bearer
//! token, and turns responses into [`ApiResponse`] envelopes or
//! [`ApiError`]s. Endpoint groups live in [`crate::api`].

use std::{fmt, sync::Arc, time::Duration};

use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use crate::{
    api::{AuthApi, CalendarTypesApi, CommuteApi, EventsApi, FilesApi, RemindersApi, TimeApi, UserApi},
    config::CalendarApiConfig,
    envelope::ApiResponse,
    error::ApiError,
    token::{MemoryTokenStore, TokenStore, duplicate_secret},
};

/// Client for the versioned calendar REST API
pub struct CalendarApiClient {
    http: Client,
    base_url: Url,
    timeout_secs: u64,
    token: RwLock<Option<SecretString>>,
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for CalendarApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.token.read().is_some())
            .finish_non_exhaustive()
    }
}

impl CalendarApiClient {
    /// Create a client whose token lives only in this process
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &CalendarApiConfig) -> Result<Self, ApiError> {
        Self::with_token_store(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Create a client that loads its token from `store` and writes every
    /// change back to it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn with_token_store(
        config: &CalendarApiConfig,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        config.validate().map_err(ApiError::Configuration)?;
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ApiError::Configuration(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        let token = store.load();
        debug!(base_url = %base_url, has_token = token.is_some(), "Calendar API client ready");

        Ok(Self {
            http,
            base_url,
            timeout_secs: config.timeout_secs,
            token: RwLock::new(token),
            store,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace the held token and persist the change; `None` signs out
    ///
    /// # Errors
    ///
    /// Returns an error if the token store cannot be written. The in-memory
    /// token is updated regardless.
    pub fn set_access_token(&self, token: Option<SecretString>) -> Result<(), ApiError> {
        let persisted = self.store.save(token.as_ref());
        *self.token.write() = token;
        persisted.map_err(ApiError::from)
    }

    /// Copy of the held token
    #[must_use]
    pub fn access_token(&self) -> Option<SecretString> {
        self.token.read().as_ref().map(duplicate_secret)
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn time(&self) -> TimeApi<'_> {
        TimeApi::new(self)
    }

    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    pub fn calendar_types(&self) -> CalendarTypesApi<'_> {
        CalendarTypesApi::new(self)
    }

    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(self)
    }

    pub fn files(&self) -> FilesApi<'_> {
        FilesApi::new(self)
    }

    pub fn reminders(&self) -> RemindersApi<'_> {
        RemindersApi::new(self)
    }

    pub fn commute(&self) -> CommuteApi<'_> {
        CommuteApi::new(self)
    }

    /// Absolute URL for an endpoint; each segment is percent-encoded
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn endpoint_url(&self, segments: &[&str], query: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Configuration("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&str>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint_url(segments, query)?;
        let request = self
            .http
            .get(url.clone())
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(request, &Method::GET, &url).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(segments, None)?;
        let request = self.http.request(method.clone(), url.clone()).json(body);
        self.execute(request, &method, &url).await
    }

    /// Request without a body (`POST /auth/logout`, `DELETE /events/:id`)
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint_url(segments, None)?;
        let request = self
            .http
            .request(method.clone(), url.clone())
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(request, &method, &url).await
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint_url(segments, None)?;
        let request = self.http.post(url.clone()).multipart(form);
        self.execute(request, &Method::POST, &url).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    fn transport_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            ApiError::ConnectionFailed(err.to_string())
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &Method,
        url: &Url,
    ) -> Result<ApiResponse<T>, ApiError> {
        let path = url.path();
        debug!(%method, path, "API request");

        let response = self.authorize(request).send().await.map_err(|e| {
            let err = self.transport_error(&e);
            warn!(%method, path, error = %err, "API request failed");
            err
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
            let err = ApiError::Status {
                status: status.as_u16(),
                body,
            };
            warn!(%method, path, status = status.as_u16(), error = %err, "API error response");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(%method, path, error = %e, "Unparseable API response");
            ApiError::Parse(e.to_string())
        })
    }
}
