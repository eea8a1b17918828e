//! Input row at the bottom of the chat.

use assistant::catalog::{FOOTER_NOTE, INPUT_PLACEHOLDER};
use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::reply::send_draft;

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send_draft(chat);
    };

    view! {
        <div class="composer">
            <div class="composer__inner">
                <form class="composer__form" on:submit=on_submit>
                    <input
                        class="composer__input"
                        type="text"
                        placeholder=INPUT_PLACEHOLDER
                        prop:value=move || chat.with(|state| state.input.clone())
                        on:input=move |ev| chat.update(|state| state.input = event_target_value(&ev))
                    />
                    <button
                        class="composer__send"
                        type="submit"
                        disabled=move || !chat.with(ChatState::can_send)
                    >
                        "➤"
                    </button>
                </form>
                <p class="composer__note">{FOOTER_NOTE}</p>
            </div>
        </div>
    }
}
