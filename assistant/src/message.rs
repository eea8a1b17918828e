//! Chat message model.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Typed (or clicked) by the person using the app.
    #[serde(rename = "user")]
    User,
    /// Produced by the simulated travel assistant.
    #[serde(rename = "bot")]
    Assistant,
}

/// Identifier unique within a single conversation. Increases with insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single chat turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Follow-up chips rendered under the message. Empty means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Message {
    #[must_use]
    pub fn user(id: MessageId, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self { id, sender: Sender::User, text: text.into(), timestamp_ms, suggestions: Vec::new() }
    }

    #[must_use]
    pub fn assistant(id: MessageId, text: impl Into<String>, timestamp_ms: i64, suggestions: &[&str]) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            text: text.into(),
            timestamp_ms,
            suggestions: suggestions.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    #[must_use]
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
