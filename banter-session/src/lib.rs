//! The interactive session loop.
//!
//! One session owns one [`Transcript`](banter_types::Transcript) and cycles
//! through turns: read a line of user input, replay the full transcript to
//! the backend, render reply fragments as they arrive, fold the assembled
//! reply back into the transcript. The loop is generic over its three seams
//! — [`ChatBackend`](banter_types::ChatBackend), [`InputSource`], and
//! [`RenderSink`] — so it runs identically against a terminal and a live
//! endpoint or against scripted test doubles.

pub mod io;
pub mod session;

pub use io::*;
pub use session::*;
