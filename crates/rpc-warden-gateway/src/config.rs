//! Gateway configuration.
//!
//! Configuration is read once from the environment before serving begins
//! and injected into the router; nothing here is re-read or mutated while
//! traffic is in flight.

use std::time::Duration;

use rpc_warden_core::MethodAllowlist;

/// Configuration for the proxy process.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Port the HTTP server listens on.
    pub port: u16,

    /// RPC methods allowed through the proxy.
    pub allowed_methods: MethodAllowlist,

    /// Time budget for one upstream call, in seconds.
    pub upstream_timeout_seconds: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Inbound request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ProxyConfig {
    fn default_rpc_url() -> String {
        "https://polygon-rpc.com".to_string()
    }

    const fn default_port() -> u16 {
        8080
    }

    const fn default_upstream_timeout() -> u64 {
        10
    }

    const fn default_max_body() -> usize {
        1024 * 1024 // 1 MB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Load configuration from the process environment.
    ///
    /// Unset variables fall back to their defaults. A variable that is set
    /// but unparsable also falls back, with a logged warning, so a typo in
    /// the environment cannot keep the proxy from starting.
    ///
    /// | Variable              | Meaning                               |
    /// |-----------------------|---------------------------------------|
    /// | `RPC_URL`             | Upstream endpoint URL                 |
    /// | `PORT`                | Listen port                           |
    /// | `RPC_ALLOWED_METHODS` | Comma-separated method allowlist      |
    /// | `RPC_TIMEOUT_SECS`    | Upstream time budget in seconds       |
    #[must_use]
    pub fn from_env() -> Self {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| Self::default_rpc_url());

        let allowed_methods = match std::env::var("RPC_ALLOWED_METHODS") {
            Ok(raw) => MethodAllowlist::from_comma_list(&raw),
            Err(_) => MethodAllowlist::default(),
        };

        Self {
            rpc_url,
            port: env_parse("PORT", Self::default_port()),
            allowed_methods,
            upstream_timeout_seconds: env_parse(
                "RPC_TIMEOUT_SECS",
                Self::default_upstream_timeout(),
            ),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }

    /// The address the server binds to, on all interfaces.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Get the upstream time budget as a `Duration`.
    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Get the inbound request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            rpc_url: Self::default_rpc_url(),
            port: Self::default_port(),
            allowed_methods: MethodAllowlist::default(),
            upstream_timeout_seconds: Self::default_upstream_timeout(),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparsable.
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    variable = name,
                    value = %raw,
                    "Ignoring unparsable environment variable, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
