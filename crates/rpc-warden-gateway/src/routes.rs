//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use rpc_warden_upstream::Forwarder;

use crate::handlers::{health, rpc};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Liveness check, independent of upstream reachability
/// - `POST /rpc` - Proxy a JSON-RPC request (any other verb gets 405)
pub fn create_router<F>(state: GatewayState<F>) -> Router
where
    F: Forwarder + 'static,
{
    // Extract config values before moving state
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        // Health (public)
        .route("/health", get(health::health))
        // RPC proxy
        .route(
            "/rpc",
            post(rpc::proxy_rpc::<F>).fallback(rpc::method_not_allowed),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
