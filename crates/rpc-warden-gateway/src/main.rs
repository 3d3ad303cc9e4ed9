//! RPC Warden Gateway - JSON-RPC forwarding proxy
//!
//! This is the main entry point for the proxy service. It reads its
//! configuration from the environment, wires the upstream forwarder into
//! the router, and serves until interrupted.
//!
//! # Configuration
//!
//! Set `RPC_URL` to point at the upstream JSON-RPC endpoint and `PORT` to
//! choose the listen port. `RPC_ALLOWED_METHODS` takes a comma-separated
//! method list; `RPC_TIMEOUT_SECS` bounds each upstream call.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpc_warden_gateway::{create_router, GatewayState, ProxyConfig};
use rpc_warden_upstream::{HttpForwarder, UpstreamConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rpc_warden=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RPC Warden Gateway");

    // Load configuration from environment
    let config = ProxyConfig::from_env();

    tracing::info!(
        rpc_url = %config.rpc_url,
        port = config.port,
        allowed_methods = config.allowed_methods.len(),
        upstream_timeout_seconds = config.upstream_timeout_seconds,
        "Proxy configuration loaded"
    );

    // Wire the forwarder to the configured upstream
    let upstream =
        UpstreamConfig::new(config.rpc_url.clone()).with_timeout(config.upstream_timeout());
    let forwarder = Arc::new(HttpForwarder::new(upstream));

    let listen_addr = config.listen_addr();
    let state = GatewayState::new(forwarder, config);
    let app = create_router(state);

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for an interrupt so in-flight requests can finish cleanly.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
