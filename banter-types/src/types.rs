//! Core message and request types.

use serde::{Deserialize, Serialize};

/// The role of a message participant.
///
/// Serializes to the lowercase strings the chat-completions wire format
/// expects (`"system"`, `"user"`, `"assistant"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A system message.
    System,
    /// A human user.
    User,
    /// An AI assistant.
    Assistant,
}

/// A message in a conversation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message author.
    pub role: Role,
    /// The text content of this message.
    pub content: String,
}

impl Message {
    /// Create a system message.
    ///
    /// # Example
    ///
    /// ```
    /// use banter_types::Message;
    /// let msg = Message::system("You are a helpful assistant.");
    /// ```
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// A streaming chat request to a completion endpoint.
///
/// Carries the full transcript snapshot for the turn — the service is
/// stateless between requests, so every turn resends the entire ordered
/// message history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model identifier. Empty means "use the client's default model".
    pub model: String,
    /// The conversation messages, in exact transcript order.
    pub messages: Vec<Message>,
}
