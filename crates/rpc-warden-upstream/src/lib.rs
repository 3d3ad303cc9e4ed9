//! Upstream forwarding for rpc-warden.
//!
//! This crate owns the outbound half of the proxy: it serializes a
//! validated JSON-RPC request, performs exactly one POST to the configured
//! upstream endpoint, and classifies every failure as either
//! deadline-exceeded or generic so the gateway can map each onto a distinct
//! status code.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐
//! │     Gateway      │─────▶│    Forwarder     │
//! │     (HTTP)       │      │     (trait)      │
//! └──────────────────┘      └────────┬─────────┘
//!                                    │
//!                           ┌────────▼─────────┐
//!                           │  HttpForwarder   │
//!                           │    (reqwest)     │
//!                           └────────┬─────────┘
//!                                    │ one POST, bounded
//!                           ┌────────▼─────────┐
//!                           │     Upstream     │
//!                           │  JSON-RPC node   │
//!                           └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use rpc_warden_core::RpcRequest;
//! use rpc_warden_upstream::{Forwarder, HttpForwarder, UpstreamConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let forwarder = HttpForwarder::new(UpstreamConfig::default());
//!
//! let response = forwarder.forward(RpcRequest::new("eth_blockNumber")).await?;
//! println!("upstream replied with status {}", response.status);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod forwarder;

pub use error::{ForwardError, Result};
pub use forwarder::{Forwarder, HttpForwarder, UpstreamResponse};

use std::time::Duration;

/// Configuration for the upstream JSON-RPC endpoint.
///
/// Handed to [`HttpForwarder`] at construction and immutable afterwards;
/// the target cannot be redirected while traffic is being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// URL requests are POSTed to.
    pub url: String,
    /// Time budget for one complete outbound call.
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Create a config for `url` with the default time budget.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Self::default_timeout(),
        }
    }

    /// Replace the time budget.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    const fn default_timeout() -> Duration {
        Duration::from_secs(10)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new("https://polygon-rpc.com")
    }
}
