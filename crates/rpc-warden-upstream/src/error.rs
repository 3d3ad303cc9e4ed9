//! Upstream forwarding error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, ForwardError>;

/// Classified failure of an outbound upstream call.
///
/// Exactly one attempt is made per request and every failure lands in one
/// of these buckets. The gateway maps [`ForwardError::Timeout`] to 504 and
/// everything else to 500, so the classification here is the single source
/// of truth for that distinction; callers never inspect error strings.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The call did not complete within the configured time budget.
    #[error("upstream request timed out")]
    Timeout,

    /// Connection, DNS, TLS, or any other transport failure.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The request could not be serialized to its canonical JSON form.
    #[error("failed to encode request body: {0}")]
    Body(String),
}

impl ForwardError {
    /// Whether this failure is the deadline-exceeded case.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for ForwardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}
