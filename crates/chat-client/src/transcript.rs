//! Conversation transcript and liked-message state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One chat bubble in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    /// Create a bot message stamped now.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
        }
    }
}

/// The running conversation, in display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with a bot greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::bot(greeting)],
        }
    }

    /// Append a message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Append-only set of liked message texts.
///
/// Keyed on exact text equality; liking the same text twice has no effect.
#[derive(Debug, Clone, Default)]
pub struct LikedMessages {
    texts: Vec<String>,
}

impl LikedMessages {
    /// Create an empty liked set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Like a message. Returns false when the text was already liked.
    pub fn like(&mut self, text: &str) -> bool {
        if self.contains(text) {
            return false;
        }
        self.texts.push(text.to_string());
        true
    }

    /// Whether the text has been liked.
    pub fn contains(&self, text: &str) -> bool {
        self.texts.iter().any(|liked| liked == text)
    }

    /// Liked texts in the order they were first liked.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(String::as_str)
    }

    /// Number of liked texts.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether nothing has been liked.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
