//! The chat backend trait: the seam between the session loop and the wire.

use std::future::Future;

use crate::error::TransportError;
use crate::stream::ReplyStream;
use crate::types::ChatRequest;

/// A backend that can answer one chat request with a streamed reply.
///
/// Implemented by the HTTP client in `banter-provider-openai`; the session
/// loop is generic over this trait so tests can drive it with a scripted
/// double instead of a live endpoint.
///
/// Uses RPITIT (return position impl trait in trait) — not object-safe by
/// design; compose with generics `<B: ChatBackend>`.
pub trait ChatBackend: Send + Sync {
    /// Submit `request` and return a handle to the streamed reply.
    ///
    /// An `Err` means the request itself failed (connection, status, DNS)
    /// before any streaming began. Failures after the stream opens are
    /// reported through the stream as [`crate::StreamEvent::Error`].
    fn stream_reply(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ReplyStream, TransportError>> + Send;
}
