//! Forwarding handler for the API prefix

use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName,
        header::{CONNECTION, CONTENT_LENGTH, HOST},
        uri::PathAndQuery,
    },
    response::Response,
};
use tracing::{debug, instrument, warn};

use crate::{error::ProxyError, state::ProxyState};

/// Largest request body forwarded; uploads are capped at 10 MiB upstream
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Headers that only apply to a single connection
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Remove hop-by-hop headers, including any named in `Connection`
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<HeaderName> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::try_from(name.trim()).ok())
        .collect();
    for name in named {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Forward the request to the backend and relay its response
///
/// # Errors
///
/// Returns `ProxyError::PayloadTooLarge` (413) for a body declared over
/// [`MAX_BODY_BYTES`], or `ProxyError::Upstream` (502) if the backend cannot
/// be reached.
#[instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub async fn forward(
    State(state): State<ProxyState>,
    req: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or("/", PathAndQuery::as_str);
    let url = state.upstream_url(path_and_query)?;

    if body.size_hint().lower() > MAX_BODY_BYTES as u64 {
        warn!(declared = body.size_hint().lower(), "Request body over the proxy limit");
        return Err(ProxyError::PayloadTooLarge {
            limit: MAX_BODY_BYTES,
        });
    }

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(CONTENT_LENGTH);
    if state.change_origin {
        headers.remove(HOST);
    }

    debug!(upstream = %url, "Forwarding request");
    let upstream = state
        .http
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "Upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);
    response_headers.remove(CONTENT_LENGTH);

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;
    debug!(status = status.as_u16(), bytes = bytes.len(), "Upstream responded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
