//! Host allow-list middleware
//!
//! Rejects requests whose `Host` is a domain name outside the configured
//! list, so a tunnel cannot be pointed at the proxy from an arbitrary domain.
//! IP literals (LAN access to the `0.0.0.0` bind) and `localhost` names always
//! pass. Entries starting with `.` accept the domain and every subdomain of it.
//!
//! # Example
//!
//! ```ignore
//! use presentation_http::middleware::HostAllowLayer;
//!
//! let app = Router::new()
//!     .route("/health", get(handler))
//!     .layer(HostAllowLayer::new(vec![".trycloudflare.com".to_string()]));
//! ```

use std::{
    future::Future,
    net::IpAddr,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::header::HOST,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use tracing::warn;

use crate::error::ProxyError;

/// Accepted host names
#[derive(Debug, Clone, Default)]
pub struct HostAllowList {
    entries: Vec<String>,
}

impl HostAllowList {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.trim().to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Whether `host` (with or without a port) may be served
    #[must_use]
    pub fn is_allowed(&self, host: &str) -> bool {
        let name = host_name(host).to_ascii_lowercase();
        if is_ip_literal(&name) || is_localhost(&name) {
            return true;
        }

        self.entries.iter().any(|entry| match entry.strip_prefix('.') {
            Some(domain) => name == domain || name.ends_with(entry.as_str()),
            None => name == *entry,
        })
    }
}

/// Host name without the port; bracketed IPv6 literals keep their brackets
fn host_name(host: &str) -> &str {
    let host = host.trim();
    if host.parse::<IpAddr>().is_ok() {
        return host;
    }
    if host.starts_with('[') {
        return host.find(']').map_or(host, |end| &host[..=end]);
    }
    host.split_once(':').map_or(host, |(name, _)| name)
}

fn is_ip_literal(name: &str) -> bool {
    let bare = name
        .strip_prefix('[')
        .and_then(|n| n.strip_suffix(']'))
        .unwrap_or(name);
    bare.parse::<IpAddr>().is_ok()
}

fn is_localhost(name: &str) -> bool {
    name == "localhost" || name.ends_with(".localhost")
}

/// Layer that applies the host allow-list
#[derive(Clone, Debug)]
pub struct HostAllowLayer {
    allow: Arc<HostAllowList>,
}

impl HostAllowLayer {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            allow: Arc::new(HostAllowList::new(entries)),
        }
    }
}

impl<S> Layer<S> for HostAllowLayer {
    type Service = HostAllow<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HostAllow {
            inner,
            allow: Arc::clone(&self.allow),
        }
    }
}

/// Middleware service checking the `Host` header
#[derive(Clone, Debug)]
pub struct HostAllow<S> {
    inner: S,
    allow: Arc<HostAllowList>,
}

impl<S> Service<Request> for HostAllow<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // Requests without any host information (HTTP/1.0, in-process) pass
        let host = req
            .headers()
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| req.uri().authority().map(|a| a.as_str().to_string()));

        if let Some(host) = host.filter(|h| !self.allow.is_allowed(h)) {
            warn!(%host, path = req.uri().path(), "Blocked request for host outside allow-list");
            return Box::pin(async move { Ok(ProxyError::HostNotAllowed(host).into_response()) });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(req).await })
    }
}
