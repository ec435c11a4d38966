//! Jarvis Calendar development proxy
//!
//! Main entry point for the dev server.

use std::path::PathBuf;

use anyhow::Context;
use infrastructure::{AppConfig, init_logging};
use presentation_http::{ProxyState, create_router};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load_from(config_path.as_deref()).context("loading configuration")?;
    init_logging(&config.log)?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let proxy = &config.proxy;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        target = %proxy.target,
        prefix = %proxy.api_prefix,
        allowed_hosts = ?proxy.allowed_hosts,
        "Dev proxy starting"
    );

    let state = ProxyState::from_config(proxy)?;
    let app = create_router(state, proxy);

    let addr = proxy.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dev proxy stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
