//! Conversation state machine behind the chat view.
//!
//! DESIGN
//! ======
//! Submitting a prompt appends the user message immediately and hands back a
//! `PendingReply`. The caller waits out [`TYPING_DELAY`] with whatever timer
//! it has (browser timeout, tokio sleep) and then calls `deliver`. Keeping the
//! timer outside lets the same state drive the web UI, the CLI, and tests.
//!
//! The typing indicator is a count of outstanding replies rather than a flag,
//! so a second prompt sent during the delay does not hide the indicator when
//! the first reply lands.

use std::time::Duration;

use crate::catalog::{GREETING, GREETING_SUGGESTIONS};
use crate::message::{Message, MessageId};
use crate::rules;

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// How long the assistant "types" before its reply appears.
pub const TYPING_DELAY: Duration = Duration::from_millis(1500);

/// A reply owed to a submitted prompt. Consumed by [`Conversation::deliver`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a pending reply must be delivered for the typing indicator to clear"]
pub struct PendingReply {
    prompt: String,
    reply_to: MessageId,
}

impl PendingReply {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Id of the user message this reply answers.
    #[must_use]
    pub fn reply_to(&self) -> MessageId {
        self.reply_to
    }
}

#[derive(Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
    outstanding: usize,
}

impl Conversation {
    /// Start a conversation seeded with the assistant's greeting.
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        let greeting = Message::assistant(MessageId(1), GREETING, now_ms, GREETING_SUGGESTIONS);
        Self { messages: vec![greeting], next_id: 2, outstanding: 0 }
    }

    /// Append a user message. Blank input is ignored and yields `None`.
    pub fn submit(&mut self, text: &str, now_ms: i64) -> Option<PendingReply> {
        let prompt = rules::normalize_prompt(text).ok()?;
        let id = self.allocate_id();
        self.messages.push(Message::user(id, prompt, now_ms));
        self.outstanding += 1;
        Some(PendingReply { prompt: prompt.to_owned(), reply_to: id })
    }

    /// Append the canned reply for `pending` and clear one outstanding reply.
    pub fn deliver(&mut self, pending: PendingReply, now_ms: i64) -> &Message {
        let reply = rules::respond(&pending.prompt);
        self.deliver_with(pending, reply.text, reply.suggestions, now_ms)
    }

    /// Answer `pending` with text and chips obtained elsewhere (e.g. the server API).
    pub fn deliver_with(&mut self, pending: PendingReply, text: &str, suggestions: &[&str], now_ms: i64) -> &Message {
        drop(pending);
        let id = self.allocate_id();
        self.messages.push(Message::assistant(id, text, now_ms, suggestions));
        self.outstanding = self.outstanding.saturating_sub(1);
        &self.messages[self.messages.len() - 1]
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.outstanding > 0
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: a conversation starts with the greeting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
