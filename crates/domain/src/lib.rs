//! Domain layer for Jarvis Calendar
//!
//! Contains the record types exchanged with the calendar backend, the
//! month-grid view state, mock fixtures for local development and domain
//! errors. This layer performs no I/O.

pub mod calendar_view;
pub mod entities;
pub mod errors;
pub mod fixtures;
pub mod serde_time;
pub mod value_objects;

pub use calendar_view::{CalendarView, WeekStart};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
