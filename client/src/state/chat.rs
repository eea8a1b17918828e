#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use assistant::{Conversation, PendingReply};

/// State for the chat view: the conversation plus the composer's draft text.
///
/// Provided to components as `RwSignal<ChatState>`.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub conversation: Conversation,
    pub input: String,
}

impl ChatState {
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self { conversation: Conversation::new(now_ms), input: String::new() }
    }

    /// Whether the composer's send button should be enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Take the draft text, leaving the composer empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Submit `text`; the draft is cleared only when a message was appended.
    pub fn submit(&mut self, text: &str, now_ms: i64) -> Option<PendingReply> {
        let pending = self.conversation.submit(text, now_ms)?;
        self.input.clear();
        Some(pending)
    }

    /// Submit the draft. A blank draft is left in the composer as typed.
    pub fn submit_draft(&mut self, now_ms: i64) -> Option<PendingReply> {
        let draft = self.take_input();
        let pending = self.conversation.submit(&draft, now_ms);
        if pending.is_none() {
            self.input = draft;
        }
        pending
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.conversation.is_typing()
    }
}
