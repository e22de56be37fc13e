//! Error types shared across the banter crates.

use std::time::Duration;

/// Errors from the transport layer: request submission and the streamed
/// response body.
///
/// Decode-local problems (a malformed frame, a delta without content) are
/// not errors — the decoder skips those lines silently. Only failures of the
/// connection itself surface here.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    // Retryable errors
    /// Network-level error (connection refused, reset, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// Rate limited by the endpoint.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimit {
        /// Suggested retry delay, if provided by the API.
        retry_after: Option<Duration>,
    },
    /// Endpoint is temporarily unavailable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    // Terminal errors
    /// Authentication/authorization failure.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Malformed or invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Requested model does not exist on the endpoint.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The connection failed mid-stream, after the response started.
    #[error("stream error: {0}")]
    Stream(String),
}

impl TransportError {
    /// Whether this error is likely transient.
    ///
    /// Advisory only: nothing in this crate family retries. A caller that
    /// wants retry behavior layers it on top of the transport.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::RateLimit { .. } | Self::ServiceUnavailable(_)
        )
    }
}
