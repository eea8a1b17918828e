//! Prompt submission and delayed assistant replies.
//!
//! Every way of sending (composer, suggestion chip, sidebar quick action)
//! goes through [`send_prompt`], so they all behave as if the user typed the
//! text. Delivery waits [`assistant::TYPING_DELAY`] on a browser timer;
//! server renders never schedule one.

use assistant::PendingReply;
use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::clock;

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

/// Submit `text` as a user message and schedule the assistant's reply.
///
/// Blank text is ignored and leaves the composer untouched.
pub fn send_prompt(chat: RwSignal<ChatState>, text: &str) {
    let pending = chat.try_update(|state| state.submit(text, clock::now_ms())).flatten();
    if let Some(pending) = pending {
        schedule_reply(chat, pending);
    }
}

/// Submit whatever is in the composer.
pub fn send_draft(chat: RwSignal<ChatState>) {
    let pending = chat.try_update(|state| state.submit_draft(clock::now_ms())).flatten();
    if let Some(pending) = pending {
        schedule_reply(chat, pending);
    }
}

fn schedule_reply(chat: RwSignal<ChatState>, pending: PendingReply) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("reply to message {} scheduled", pending.reply_to());
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(assistant::TYPING_DELAY).await;
            chat.update(|state| {
                let _ = state.conversation.deliver(pending, clock::now_ms());
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, pending);
    }
}
