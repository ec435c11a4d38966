//! HTTP middleware components

pub mod host_allow;

pub use host_allow::{HostAllow, HostAllowLayer, HostAllowList};
