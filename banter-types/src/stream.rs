//! Streaming event types for incremental chat replies.

use std::pin::Pin;

use futures::Stream;

use crate::error::TransportError;

/// An event emitted while a streamed reply is arriving.
#[derive(Debug)]
pub enum StreamEvent {
    /// One incremental piece of assistant text, yielded the moment its frame
    /// is decoded. Consumed immediately; not retained by the decoder.
    Delta(String),
    /// The connection failed mid-stream. Terminal: no further events follow.
    Error(TransportError),
}

/// Handle to one streamed reply.
///
/// A lazy, finite, non-restartable sequence of [`StreamEvent`]s. The stream
/// is exhausted when the terminator frame is observed or the transport
/// closes; a transport failure yields a final [`StreamEvent::Error`].
/// Dropping the handle closes the underlying connection.
///
/// Consume with `StreamExt::next()`.
pub struct ReplyStream {
    /// The stream of events.
    pub events: Pin<Box<dyn Stream<Item = StreamEvent> + Send>>,
}

impl ReplyStream {
    /// Wrap a stream of events into a handle.
    pub fn new(events: impl Stream<Item = StreamEvent> + Send + 'static) -> Self {
        Self {
            events: Box::pin(events),
        }
    }
}

impl std::fmt::Debug for ReplyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyStream").finish_non_exhaustive()
    }
}
