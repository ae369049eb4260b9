//! Conversational chat transcript for the Q&A session.
//!
//! The transcript is an ordered, append-only log of turns. Turns are
//! immutable once created and live only for the current session; nothing
//! is persisted.

use serde::{Deserialize, Serialize};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single immutable turn in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    text: String,
    sender: Sender,
}

impl ChatTurn {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

/// Ordered, append-only sequence of chat turns.
///
/// Insertion order is display order; turns are never reordered or deleted.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn from the user.
    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatTurn {
        self.push(text, Sender::User)
    }

    /// Append a turn from the bot.
    pub fn push_bot(&mut self, text: impl Into<String>) -> &ChatTurn {
        self.push(text, Sender::Bot)
    }

    fn push(&mut self, text: impl Into<String>, sender: Sender) -> &ChatTurn {
        self.turns.push(ChatTurn {
            text: text.into(),
            sender,
        });
        self.turns.last().expect("transcript is non-empty after push")
    }

    /// All turns in insertion order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
