//! Application layer - Use cases and orchestration
//!
//! Contains the agenda use cases and the port they need from the calendar
//! backend. Adapters in the infrastructure layer implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
