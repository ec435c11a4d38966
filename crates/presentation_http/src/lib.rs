//! Jarvis Calendar development proxy
//!
//! Serves the built frontend, forwards the API prefix to the local backend
//! and refuses requests addressed to hosts outside the allow-list.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ProxyError;
pub use middleware::{HostAllowLayer, HostAllowList};
pub use routes::create_router;
pub use state::ProxyState;
