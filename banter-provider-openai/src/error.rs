//! Internal error helpers for mapping HTTP/reqwest errors to [`TransportError`].

use std::time::Duration;

use banter_types::TransportError;

/// Map an HTTP status code from a chat-completions endpoint to a
/// [`TransportError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> TransportError {
    match status.as_u16() {
        401 | 403 => TransportError::Authentication(body.to_string()),
        404 => TransportError::ModelNotFound(body.to_string()),
        429 => TransportError::RateLimit { retry_after: None },
        400 | 422 => TransportError::InvalidRequest(body.to_string()),
        500..=599 => TransportError::ServiceUnavailable(body.to_string()),
        _ => TransportError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map a [`reqwest::Error`] to a [`TransportError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(Duration::from_secs(30))
    } else {
        TransportError::Network(Box::new(err))
    }
}
