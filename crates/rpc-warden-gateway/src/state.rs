//! Gateway application state.
//!
//! This module defines the shared state that is available to all request
//! handlers.

use std::sync::Arc;

use rpc_warden_upstream::Forwarder;

use crate::config::ProxyConfig;

/// Shared application state for the gateway.
///
/// Everything here is fixed before serving begins and only ever read
/// concurrently; in-flight requests never mutate it.
pub struct GatewayState<F>
where
    F: Forwarder,
{
    /// The forwarder performing outbound upstream calls.
    pub forwarder: Arc<F>,
    /// Proxy configuration, including the method allowlist.
    pub config: ProxyConfig,
}

impl<F> GatewayState<F>
where
    F: Forwarder,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(forwarder: Arc<F>, config: ProxyConfig) -> Self {
        Self { forwarder, config }
    }
}

impl<F> Clone for GatewayState<F>
where
    F: Forwarder,
{
    fn clone(&self) -> Self {
        Self {
            forwarder: Arc::clone(&self.forwarder),
            config: self.config.clone(),
        }
    }
}
