//! Scrolling conversation view: message bubbles, chips, typing indicator.

use assistant::Message;
use leptos::prelude::*;

use crate::components::suggestion_chips::SuggestionChips;
use crate::components::typing_indicator::TypingIndicator;
use crate::state::chat::ChatState;
use crate::util::clock;

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    // Effects only run in the browser, after hydration.
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    // Keep the newest message (or the typing dots) in view.
    Effect::new(move || {
        let _ = chat.with(|state| (state.conversation.len(), state.is_typing()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = scroll_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=scroll_ref>
            <div class="message-list__inner">
                {move || {
                    chat.with(|state| {
                        state.conversation.messages().iter().map(|msg| message_row(msg, mounted)).collect::<Vec<_>>()
                    })
                }}
                <Show when=move || chat.with(ChatState::is_typing)>
                    <TypingIndicator/>
                </Show>
            </div>
        </div>
    }
}

fn message_row(msg: &Message, mounted: RwSignal<bool>) -> impl IntoView + use<> {
    let is_user = msg.is_user();
    let is_assistant = !is_user;
    let text = msg.text.clone();
    let timestamp_ms = msg.timestamp_ms;
    let suggestions = msg.suggestions.clone();

    view! {
        <div class="message-row">
            <div class="message" class:message--user=is_user class:message--assistant=is_assistant>
                <div class="message__bubble">
                    <p class="message__text">{text}</p>
                    <p class="message__time">{move || clock::time_label(timestamp_ms, mounted.get())}</p>
                </div>
            </div>
            {(!suggestions.is_empty()).then(|| view! { <SuggestionChips suggestions/> })}
        </div>
    }
}
