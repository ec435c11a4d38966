//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod calendar_backend_port;

#[cfg(test)]
pub use calendar_backend_port::MockCalendarBackendPort;
pub use calendar_backend_port::{BackendError, CalendarBackendPort};
