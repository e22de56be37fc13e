//! OpenAI-compatible chat-completions client for banter.
//!
//! Implements the [`ChatBackend`] trait from `banter-types` against any
//! endpoint speaking the [Chat Completions
//! API](https://platform.openai.com/docs/api-reference/chat) — vLLM,
//! llama.cpp server, Ollama's OpenAI shim, or OpenAI itself.
//!
//! # Usage
//!
//! ```no_run
//! use banter_provider_openai::OpenAi;
//!
//! let backend = OpenAi::new("http://10.0.0.4:8000")
//!     .model("meta-llama/Llama-3.1-8B-Instruct");
//! ```
//!
//! # Features
//!
//! - Streaming [`ChatBackend`] implementation over SSE
//! - Tolerant frame decoding: keep-alive and malformed lines are skipped
//! - Optional bearer-token auth (self-hosted endpoints need none)
//! - Error mapping from HTTP status codes to [`TransportError`] variants
//!
//! [`ChatBackend`]: banter_types::ChatBackend
//! [`TransportError`]: banter_types::TransportError

pub mod client;
pub mod error;
pub mod mapping;
pub mod streaming;

pub use client::OpenAi;

// Re-export banter-types for convenience
pub use banter_types::{ChatBackend, ChatRequest, ReplyStream, StreamEvent, TransportError};
