//! HTTP gateway for the rpc-warden JSON-RPC proxy.
//!
//! This crate provides the public-facing surface of the proxy. It handles:
//!
//! - Decoding the inbound JSON-RPC envelope
//! - Enforcing the RPC method allowlist (strict opt-in)
//! - Forwarding admitted requests to the configured upstream
//! - Relaying the upstream status and body verbatim
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Clients                              │
//! │                    (JSON-RPC / HTTP)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     rpc-warden-gateway                      │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐    │
//! │  │   Decode    │ │  Allowlist  │ │    Status/Error     │    │
//! │  │  Envelope   │ │    Gate     │ │      Mapping        │    │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌──────────────┐
//!                       │  Forwarder   │
//!                       │  (upstream)  │
//!                       └──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rpc_warden_gateway::{create_router, GatewayState, ProxyConfig};
//! use rpc_warden_upstream::{HttpForwarder, UpstreamConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = ProxyConfig::from_env();
//!
//! // Wire the forwarder to the configured upstream
//! let upstream =
//!     UpstreamConfig::new(config.rpc_url.clone()).with_timeout(config.upstream_timeout());
//! let forwarder = Arc::new(HttpForwarder::new(upstream));
//!
//! // Create router
//! let app = create_router(GatewayState::new(forwarder, config));
//!
//! // Run server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use routes::create_router;
pub use state::GatewayState;
