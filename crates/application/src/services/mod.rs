//! Application services
//!
//! Services orchestrate domain logic and port interactions.

mod agenda_service;

pub use agenda_service::{AgendaDay, AgendaService, MonthAgenda};
