//! Proxy error types and responses.
//!
//! This module defines the standard error format for everything the proxy
//! rejects or fails on itself. Upstream-produced errors are not represented
//! here; whatever the upstream returns is relayed verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use rpc_warden_upstream::ForwardError;

/// Proxy error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The request body was not a decodable JSON-RPC envelope.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The RPC method is not in the allowlist.
    #[error("method not allowed: {0}")]
    MethodForbidden(String),

    /// The upstream call exceeded its time budget.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// The upstream call failed for any reason other than a timeout.
    #[error("failed to forward request: {0}")]
    Upstream(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// Error details.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ProxyError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodForbidden(_) => StatusCode::FORBIDDEN,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::MethodForbidden(_) => "method_forbidden",
            Self::UpstreamTimeout => "upstream_timeout",
            Self::Upstream(_) => "upstream_failed",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ForwardError> for ProxyError {
    fn from(err: ForwardError) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else {
            Self::Upstream(err.to_string())
        }
    }
}
