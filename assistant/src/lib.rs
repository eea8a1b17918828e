//! Travel assistant domain model shared by `client`, `server`, and `cli`.
//!
//! This crate owns the chat message model, the keyword rules that pick a
//! canned reply and follow-up chips, the static sidebar catalog, and the
//! conversation state machine that drives the simulated typing delay. It does
//! no I/O; callers supply clocks and timers.

pub mod catalog;
pub mod clock;
pub mod conversation;
pub mod message;
pub mod rules;

pub use conversation::{Conversation, PendingReply, TYPING_DELAY};
pub use message::{Message, MessageId, Sender};
pub use rules::{PromptError, Reply, Topic};
