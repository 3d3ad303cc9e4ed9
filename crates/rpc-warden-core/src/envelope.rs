//! The JSON-RPC request envelope.
//!
//! The proxy only decodes the four top-level fields it needs for method
//! dispatch. Everything inside `params` is opaque and travels upstream
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version written on every outbound request.
pub const PROTOCOL_VERSION: &str = "2.0";

/// A JSON-RPC request envelope.
///
/// Inbound decoding is deliberately permissive: `jsonrpc`, `method`, and
/// `id` all default to their zero values when absent, so the authorization
/// decision rests solely on the (possibly empty) method name. A field that
/// is present with the wrong type is still a decode error.
///
/// The caller's `jsonrpc` value is never trusted; the forwarder overwrites
/// it with [`PROTOCOL_VERSION`] before serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version claimed by the caller.
    #[serde(default)]
    pub jsonrpc: String,

    /// RPC method name. The only field the proxy inspects.
    #[serde(default)]
    pub method: String,

    /// Positional parameters. Opaque to the proxy; omitted from the
    /// serialized form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,

    /// Request correlation identifier, echoed back by the upstream.
    #[serde(default)]
    pub id: i64,
}

impl RpcRequest {
    /// Create an envelope for `method` carrying the canonical protocol
    /// version, no parameters, and id `0`.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_owned(),
            method: method.into(),
            params: None,
            id: 0,
        }
    }

    /// Set positional parameters.
    #[must_use]
    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the correlation identifier.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
