//! The conversation transcript: an ordered, append-only log of messages.

use crate::types::{Message, Role};

/// An ordered log of the conversation so far.
///
/// Insertion order is conversational order and is semantically significant:
/// the full transcript is replayed verbatim as context on every request.
///
/// Invariants, enforced at mutation time:
///
/// - The first entry, if present, is the single [`Role::System`] message,
///   seeded at construction and never duplicated or reordered.
/// - User and assistant messages strictly alternate: every user message is
///   followed by exactly one assistant message before the next user message.
///
/// Violating the alternation order is a caller bug, not a runtime condition,
/// so [`push_user`](Self::push_user) and
/// [`push_assistant`](Self::push_assistant) panic rather than return an
/// error. The session loop cannot reach either panic through any sequence of
/// its own transitions.
///
/// A transcript is owned by exactly one session loop; it is not shared and
/// needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with the single leading system message.
    #[must_use]
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Create an empty transcript with no system message.
    #[must_use]
    pub fn without_system() -> Self {
        Self::default()
    }

    /// Append a user message.
    ///
    /// # Panics
    ///
    /// Panics if an assistant reply is still pending, i.e. the previous user
    /// message has not yet been answered.
    pub fn push_user(&mut self, text: impl Into<String>) {
        assert!(
            !self.reply_pending(),
            "push_user called while an assistant reply is pending"
        );
        self.messages.push(Message::user(text));
    }

    /// Append an assistant message, completing the current turn.
    ///
    /// `text` may be empty (the stream produced zero content fragments); the
    /// empty message is still appended so that user and assistant messages
    /// keep alternating.
    ///
    /// # Panics
    ///
    /// Panics if no user message is awaiting a reply.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        assert!(
            self.reply_pending(),
            "push_assistant called without a pending user message"
        );
        self.messages.push(Message::assistant(text));
    }

    /// Whether the latest entry is an unanswered user message.
    #[must_use]
    pub fn reply_pending(&self) -> bool {
        matches!(
            self.messages.last(),
            Some(Message {
                role: Role::User,
                ..
            })
        )
    }

    /// The full ordered message sequence, suitable for serialization into a
    /// request payload. Never windowed or truncated.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages, including the system message if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript holds no messages at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
