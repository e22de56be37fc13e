//! SSE stream decoding for chat-completions responses.
//!
//! The response body is line-oriented:
//! ```text
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//! Each line is either blank, a `data:`-prefixed JSON payload, a
//! `data:`-prefixed terminator, or a keep-alive/comment line. Decoding is
//! tolerant by contract: unparseable or unexpected lines are skipped, never
//! fatal — some transports interleave non-JSON keep-alives.
//!
//! Reference: <https://platform.openai.com/docs/api-reference/chat/streaming>

use banter_types::{ReplyStream, StreamEvent, TransportError};
use futures::{Stream, StreamExt};
use reqwest::Response;

/// Terminator payload signalling normal end of the stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Outcome of decoding one line of the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDecode {
    /// The line carried no fragment: blank, keep-alive, malformed JSON, or a
    /// delta without content (role-only, finish-reason-only).
    Nothing,
    /// The terminator was observed; decoding ends successfully.
    Done,
    /// One fragment of assistant text.
    Delta(String),
}

/// Decode a single line of the streamed body.
///
/// Pure and total — never fails outward. This is the entire tolerant-parsing
/// policy in one place:
///
/// 1. Blank lines carry no data.
/// 2. Lines without the `data:` framing prefix are control/keep-alive lines.
/// 3. A payload equal to `[DONE]` ends the stream (normal termination).
/// 4. A payload that is not valid JSON is discarded.
/// 5. A frame without `choices[0].delta.content` produces no fragment; a
///    present content string (even empty) is one fragment.
#[must_use]
pub fn decode_line(line: &str) -> LineDecode {
    if line.is_empty() {
        return LineDecode::Nothing;
    }

    let Some(payload) = line.strip_prefix("data:") else {
        return LineDecode::Nothing;
    };
    let payload = payload.strip_prefix(' ').unwrap_or(payload);

    if payload == DONE_SENTINEL {
        return LineDecode::Done;
    }

    let Ok(json) = serde_json::from_str::<serde_json::Value>(payload) else {
        return LineDecode::Nothing;
    };

    match json["choices"][0]["delta"]["content"].as_str() {
        Some(content) => LineDecode::Delta(content.to_string()),
        None => LineDecode::Nothing,
    }
}

/// Wrap an HTTP response body into a [`ReplyStream`] of decoded fragments.
pub(crate) fn stream_reply_body(response: Response) -> ReplyStream {
    ReplyStream::new(decode_sse_stream(response.bytes_stream()))
}

/// Decode a raw byte stream into a stream of [`StreamEvent`]s.
///
/// Buffers partial lines across byte chunks and decodes each complete line
/// as it lands, so fragments are yielded the moment their line is parsed —
/// the whole response is never buffered. The stream ends when the terminator
/// is observed or the transport closes; a read error is surfaced as a final
/// [`StreamEvent::Error`].
fn decode_sse_stream(
    byte_stream: impl Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
) -> impl Stream<Item = StreamEvent> + Send + 'static {
    async_stream::stream! {
        let mut bytes_stream = std::pin::pin!(byte_stream);
        let mut line_buf = String::new();

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield StreamEvent::Error(TransportError::Stream(format!(
                        "stream read error: {e}"
                    )));
                    return;
                }
            };

            let chunk_str = match std::str::from_utf8(&chunk) {
                Ok(s) => s,
                Err(e) => {
                    yield StreamEvent::Error(TransportError::Stream(format!(
                        "UTF-8 decode error: {e}"
                    )));
                    return;
                }
            };

            // Append chunk to the line buffer and decode complete lines
            line_buf.push_str(chunk_str);

            while let Some(newline_pos) = line_buf.find('\n') {
                let line = line_buf[..newline_pos].trim_end_matches('\r').to_string();
                line_buf.drain(..=newline_pos);

                match decode_line(&line) {
                    LineDecode::Delta(text) => yield StreamEvent::Delta(text),
                    LineDecode::Done => return,
                    LineDecode::Nothing => {}
                }
            }
        }

        // Transport closed without a terminator: decode any unterminated tail.
        let tail = line_buf.trim_end_matches('\r');
        if let LineDecode::Delta(text) = decode_line(tail) {
            yield StreamEvent::Delta(text);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
