//! The upstream forwarder.
//!
//! This module provides the [`Forwarder`] trait and its production
//! implementation, [`HttpForwarder`], which performs exactly one outbound
//! POST per validated request.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use reqwest::header::CONTENT_TYPE;
use rpc_warden_core::{RpcRequest, PROTOCOL_VERSION};

use crate::error::{ForwardError, Result};
use crate::UpstreamConfig;

/// Trait for forwarding a validated JSON-RPC request upstream.
///
/// The gateway holds a `Forwarder` rather than a concrete client so request
/// handling can be tested against a stub with no network involved. The
/// forwarder does not re-check the allowlist; authorization is entirely the
/// gateway's responsibility.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Perform exactly one outbound call for `request`.
    ///
    /// No retries are attempted on any failure.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Timeout`] when the call exceeds its time
    /// budget, [`ForwardError::Body`] when the request cannot be encoded,
    /// and [`ForwardError::Transport`] for any other failure.
    async fn forward(&self, request: RpcRequest) -> Result<UpstreamResponse>;
}

/// The raw upstream reply: its verbatim status plus an unbuffered body.
pub struct UpstreamResponse {
    /// HTTP status code returned by the upstream.
    pub status: u16,
    /// Response body as a stream of byte chunks. Never buffered or parsed
    /// on this side; the gateway copies it onward as it arrives.
    pub body: BoxStream<'static, Result<Bytes>>,
}

impl UpstreamResponse {
    /// Build a response from an already buffered body.
    ///
    /// Real forwarding never buffers; this exists for stub forwarders in
    /// tests and the odd caller that already holds the full bytes.
    #[must_use]
    pub fn buffered(status: u16, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            status,
            body: stream::iter([Ok(body)]).boxed(),
        }
    }
}

impl fmt::Debug for UpstreamResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// `Forwarder` backed by a shared `reqwest` client.
///
/// The upstream URL and time budget are fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpForwarder {
    /// Create a forwarder for the given upstream.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created.
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// The upstream URL this forwarder posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, mut request: RpcRequest) -> Result<UpstreamResponse> {
        // The caller's version claim is never trusted.
        request.jsonrpc = PROTOCOL_VERSION.to_owned();

        let body = serde_json::to_vec(&request).map_err(|e| ForwardError::Body(e.to_string()))?;

        let response = self
            .client
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(method = %request.method, status, "Upstream call completed");

        Ok(UpstreamResponse {
            status,
            body: response.bytes_stream().map_err(ForwardError::from).boxed(),
        })
    }
}
