//! Core protocol types for rpc-warden.
//!
//! This crate provides the foundational types shared by the gateway and the
//! upstream forwarder:
//!
//! - **Envelope**: The minimal JSON-RPC request shape the proxy understands
//! - **Allowlist**: The immutable set of RPC methods allowed through
//!
//! # Example
//!
//! ```
//! use rpc_warden_core::{MethodAllowlist, RpcRequest};
//!
//! let allowlist = MethodAllowlist::from_methods(["eth_blockNumber"]);
//!
//! let request: RpcRequest = serde_json::from_str(
//!     r#"{"jsonrpc":"2.0","method":"eth_blockNumber","params":[],"id":1}"#,
//! )
//! .unwrap();
//!
//! assert!(allowlist.contains(&request.method));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod allowlist;
pub mod envelope;

pub use allowlist::MethodAllowlist;
pub use envelope::{RpcRequest, PROTOCOL_VERSION};
