//! Route definitions

use axum::{
    Router,
    routing::{any, get},
};
use infrastructure::ProxyConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{handlers, middleware::HostAllowLayer, state::ProxyState};

/// Create the proxy router
///
/// `/health` answers locally, everything under `api_prefix` goes upstream,
/// and other paths fall back to `static_dir` when one is configured.
pub fn create_router(state: ProxyState, config: &ProxyConfig) -> Router {
    let prefix = config.api_prefix.trim_end_matches('/');

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(prefix, any(handlers::proxy::forward))
        .route(&format!("{prefix}/{{*rest}}"), any(handlers::proxy::forward))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    if config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    // Added last so it runs first
    router
        .layer(TraceLayer::new_for_http())
        .layer(HostAllowLayer::new(config.allowed_hosts.clone()))
}
