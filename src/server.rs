//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client, wires the shorten service into the router and
//! runs the Axum server until Ctrl-C.

use crate::application::services::ShortenService;
use crate::config::Config;
use crate::infrastructure::affiliate_client::AffiliateClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upstream HTTP client with the configured credential and timeout
/// - Shorten service and shared state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = AffiliateClient::new(config.upstream_url.clone(), config.credential())
        .context("Failed to build upstream HTTP client")?;
    tracing::info!("Upstream client ready ({})", client.endpoint());

    let shorten_service = Arc::new(ShortenService::new(Arc::new(client)));
    let state = AppState::new(shorten_service, config.has_session_cookie());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
