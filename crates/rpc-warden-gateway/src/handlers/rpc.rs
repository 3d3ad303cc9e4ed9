//! The RPC proxy endpoint.
//!
//! This module provides the single entry point for proxy traffic: decode
//! the envelope, enforce the method allowlist, forward, and relay the
//! upstream reply verbatim.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;

use rpc_warden_core::RpcRequest;
use rpc_warden_upstream::Forwarder;

use crate::error::ProxyError;
use crate::state::GatewayState;

/// Proxy a JSON-RPC request to the configured upstream.
///
/// The pipeline is strictly sequential: decode, authorize, forward, relay.
/// The forwarder is never invoked for a request that fails to decode or
/// names a method outside the allowlist, and a failed call is never
/// retried.
///
/// The upstream status code and body are relayed without inspection, so a
/// JSON-RPC error object inside a 200 reply passes through as-is. The body
/// is streamed; a transport failure mid-body terminates the response,
/// since the status line is already on the wire by then.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidRequest`] (400) for an undecodable body,
/// [`ProxyError::MethodForbidden`] (403) for a method outside the
/// allowlist, [`ProxyError::UpstreamTimeout`] (504) when the upstream call
/// exceeds its budget, and [`ProxyError::Upstream`] (500) for any other
/// upstream failure.
pub async fn proxy_rpc<F>(
    State(state): State<Arc<GatewayState<F>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ProxyError>
where
    F: Forwarder + 'static,
{
    let request: RpcRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected undecodable request body");
        ProxyError::InvalidRequest(err.to_string())
    })?;

    if !state.config.allowed_methods.contains(&request.method) {
        tracing::warn!(method = %request.method, "Rejected method not in allowlist");
        return Err(ProxyError::MethodForbidden(request.method));
    }

    let method = request.method.clone();

    let upstream = match state.forwarder.forward(request).await {
        Ok(upstream) => upstream,
        Err(err) => {
            let err = ProxyError::from(err);
            if matches!(err, ProxyError::UpstreamTimeout) {
                tracing::warn!(method = %method, "Upstream call timed out");
            } else {
                tracing::error!(method = %method, error = %err, "Upstream call failed");
            }
            return Err(err);
        }
    };

    let status = StatusCode::from_u16(upstream.status).map_err(|_| {
        ProxyError::Upstream(format!("invalid upstream status {}", upstream.status))
    })?;

    tracing::info!(method = %method, status = upstream.status, "Proxied RPC request");

    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Body::from_stream(upstream.body),
    ))
}

/// Fallback for non-POST verbs on the proxy route.
///
/// The body is never read; the verb alone is enough to reject.
pub async fn method_not_allowed(method: Method) -> StatusCode {
    tracing::warn!(http_method = %method, "Rejected non-POST request to RPC endpoint");
    StatusCode::METHOD_NOT_ALLOWED
}
