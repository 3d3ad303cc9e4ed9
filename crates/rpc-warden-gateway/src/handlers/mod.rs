//! HTTP request handlers.
//!
//! This module contains the endpoint handlers for the proxy.

pub mod health;
pub mod rpc;
