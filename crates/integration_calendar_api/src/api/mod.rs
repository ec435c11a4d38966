//! Endpoint groups of the calendar API
//!
//! Each group borrows the [`CalendarApiClient`](crate::CalendarApiClient)
//! and is obtained from it, e.g. `client.events().list(&query)`.

mod auth;
mod calendar_types;
mod commute;
mod events;
mod files;
mod reminders;
mod time;
mod user;

pub use auth::AuthApi;
pub use calendar_types::CalendarTypesApi;
pub use commute::CommuteApi;
pub use events::EventsApi;
pub use files::{FileUpload, FilesApi};
pub use reminders::RemindersApi;
pub use time::TimeApi;
pub use user::UserApi;
