//! Input and output seams for the session loop.

use std::future::Future;

/// One observation from the user input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// One line of user text. May be empty — empty input is valid content
    /// and is forwarded as-is.
    Line(String),
    /// The user interrupted at the prompt (ctrl-c).
    Interrupted,
    /// The input source is exhausted (ctrl-d, closed stdin).
    Eof,
}

/// Source of user input: one blocking line read per turn.
pub trait InputSource: Send {
    /// Read the next line of user input.
    ///
    /// Implementations map their own interrupt/EOF signals to
    /// [`InputEvent::Interrupted`] and [`InputEvent::Eof`]; an `Err` is an
    /// unrecoverable input failure and ends the session.
    fn read_line(&mut self) -> impl Future<Output = std::io::Result<InputEvent>> + Send;
}

/// Append-only text output consumed by the presentation layer.
///
/// The session loop owns no rendering policy beyond ordering: fragments are
/// emitted in arrival order, `turn_end` marks each reply boundary, and
/// `notice` carries out-of-band error text.
pub trait RenderSink: Send {
    /// Render one reply fragment. Called the moment the fragment decodes;
    /// implementations should display it without buffering the whole reply.
    fn fragment(&mut self, text: &str);

    /// Mark the end of a reply (the turn boundary).
    fn turn_end(&mut self);

    /// Surface an out-of-band notice (a transport failure, typically).
    fn notice(&mut self, text: &str);
}
