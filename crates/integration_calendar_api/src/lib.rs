//! REST client for the Jarvis Calendar backend
//!
//! [`CalendarApiClient`] talks to the versioned API (`/api/v1`): it holds the
//! bearer token, persists it through a [`TokenStore`], unwraps the
//! `{ success, data, message }` envelope into [`ApiResponse`], and maps
//! failures to [`ApiError`]. Endpoints are grouped the way the backend
//! groups them:
//!
//! ```rust,ignore
//! use integration_calendar_api::{CalendarApiClient, CalendarApiConfig, EventQuery};
//!
//! let client = CalendarApiClient::new(&CalendarApiConfig::default().with_env_override())?;
//! client.auth().login("kai").await?;
//!
//! let today = chrono::Local::now().date_naive();
//! let events = client.events().list(&EventQuery::on(today)).await?;
//! ```
//!
//! [`LegacyApiClient`] covers the older unversioned API and returns raw JSON.

pub mod api;
mod client;
mod config;
mod envelope;
mod error;
mod legacy;
mod query;
mod token;

pub use api::{
    AuthApi, CalendarTypesApi, CommuteApi, EventsApi, FileUpload, FilesApi, RemindersApi,
    TimeApi, UserApi,
};
pub use client::CalendarApiClient;
pub use config::{API_URL_ENV, CalendarApiConfig, LegacyApiConfig};
pub use envelope::{ApiResponse, LoginSession};
pub use error::ApiError;
pub use legacy::LegacyApiClient;
pub use query::{EventQuery, encode_pairs};
pub use token::{MemoryTokenStore, TokenStore, TokenStoreError, duplicate_secret};
