//! The session loop: one interactive cycle per turn.

use banter_types::{ChatBackend, ChatRequest, StreamEvent, Transcript};
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::io::{InputEvent, InputSource, RenderSink};

/// Phase of the current turn, logged as the loop transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnPhase {
    AwaitingInput,
    AwaitingResponseStart,
    Streaming,
    TurnComplete,
    Closed,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user interrupted at the prompt.
    Interrupted,
    /// The input source was exhausted.
    Eof,
    /// The cancellation token fired (mid-turn ctrl-c).
    Cancelled,
}

/// Outcome of one turn.
enum TurnOutcome {
    /// The turn completed; an assistant message was appended.
    Complete,
    /// The turn was cancelled mid-stream; partial output was discarded and
    /// nothing was appended.
    Cancelled,
}

/// The interactive session loop.
///
/// Owns the [`Transcript`] exclusively: no other task mutates it, so no
/// locking is involved. Turns never overlap — input, request issuance,
/// stream consumption, and rendering are strictly sequential, and decoding
/// interleaves with rendering one fragment at a time.
///
/// Cancellation is observed at both suspension points: the input read (the
/// input source reports ctrl-c at the prompt as
/// [`InputEvent::Interrupted`]) and the transport read (the token is raced
/// against the next stream item). Cancelling mid-stream discards the
/// partially accumulated reply and closes the connection by dropping the
/// stream; the pending user message stays the latest transcript entry.
pub struct SessionLoop<B, I, R> {
    backend: B,
    input: I,
    sink: R,
    transcript: Transcript,
    model: String,
    cancel: CancellationToken,
}

impl<B: ChatBackend, I: InputSource, R: RenderSink> SessionLoop<B, I, R> {
    /// Create a session over the given backend and IO seams.
    ///
    /// `transcript` is typically freshly seeded with a system prompt;
    /// `model` is stamped onto every request.
    pub fn new(
        backend: B,
        input: I,
        sink: R,
        transcript: Transcript,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            input,
            sink,
            transcript,
            model: model.into(),
            cancel: CancellationToken::new(),
        }
    }

    /// Thread an external cancellation token into the loop.
    ///
    /// The caller keeps a clone and cancels it to abort the session, even
    /// while a reply is still streaming.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run the session until the user ends it or the token fires.
    ///
    /// Returns the final transcript and the reason the session closed.
    pub async fn run(mut self) -> (Transcript, SessionEnd) {
        let end = loop {
            self.phase(TurnPhase::AwaitingInput);

            let event = tokio::select! {
                _ = self.cancel.cancelled() => break SessionEnd::Cancelled,
                event = self.input.read_line() => event,
            };

            match event {
                Ok(InputEvent::Line(line)) => match self.run_turn(line).await {
                    TurnOutcome::Complete => {}
                    TurnOutcome::Cancelled => break SessionEnd::Cancelled,
                },
                Ok(InputEvent::Interrupted) => break SessionEnd::Interrupted,
                Ok(InputEvent::Eof) => break SessionEnd::Eof,
                Err(e) => {
                    self.sink.notice(&format!("input error: {e}"));
                    break SessionEnd::Eof;
                }
            }
        };

        self.phase(TurnPhase::Closed);
        (self.transcript, end)
    }

    /// Drive one turn: append the user message, stream the reply, fold it
    /// back into the transcript.
    async fn run_turn(&mut self, line: String) -> TurnOutcome {
        self.transcript.push_user(line);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: self.transcript.messages().to_vec(),
        };

        self.phase(TurnPhase::AwaitingResponseStart);
        let submission = tokio::select! {
            _ = self.cancel.cancelled() => return TurnOutcome::Cancelled,
            result = self.backend.stream_reply(request) => result,
        };

        let mut reply = match submission {
            Ok(reply) => reply,
            Err(e) => {
                // Submission failed before any streaming began. The turn
                // still advances with an empty reply so user and assistant
                // messages keep alternating; the failure is surfaced as a
                // notice rather than rolling the user message back.
                self.sink.notice(&format!("request failed: {e}"));
                self.transcript.push_assistant("");
                self.sink.turn_end();
                self.phase(TurnPhase::TurnComplete);
                return TurnOutcome::Complete;
            }
        };

        self.phase(TurnPhase::Streaming);
        let mut accumulator = String::new();
        loop {
            let event = tokio::select! {
                _ = self.cancel.cancelled() => return TurnOutcome::Cancelled,
                event = reply.events.next() => event,
            };

            match event {
                Some(StreamEvent::Delta(text)) => {
                    self.sink.fragment(&text);
                    accumulator.push_str(&text);
                }
                Some(StreamEvent::Error(e)) => {
                    // Mid-stream failure ends the turn but keeps whatever
                    // arrived before it, unlike cancellation.
                    self.sink.notice(&format!("stream failed: {e}"));
                    break;
                }
                None => break,
            }
        }

        self.sink.turn_end();
        self.transcript.push_assistant(accumulator);
        self.phase(TurnPhase::TurnComplete);
        TurnOutcome::Complete
    }

    fn phase(&self, phase: TurnPhase) {
        tracing::debug!(phase = ?phase, messages = self.transcript.len(), "session phase");
    }
}
