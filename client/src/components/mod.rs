//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome and read/write the shared
//! `RwSignal<ChatState>` from Leptos context.

pub mod chat_header;
pub mod composer;
pub mod message_list;
pub mod sidebar;
pub mod suggestion_chips;
pub mod typing_indicator;
