//! Core types for the banter chat client.
//!
//! This crate defines the vocabulary shared by the wire client and the
//! session loop: [`Message`] and [`Role`], the conversation [`Transcript`],
//! the [`ChatRequest`] payload, streaming events, and [`TransportError`].
//! It also defines the [`ChatBackend`] trait — the seam that lets the
//! session loop run against the real HTTP client or a scripted test double.

pub mod backend;
pub mod error;
pub mod stream;
pub mod transcript;
pub mod types;

pub use backend::*;
pub use error::*;
pub use stream::*;
pub use transcript::*;
pub use types::*;
