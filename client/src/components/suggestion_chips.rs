//! Follow-up chips rendered under an assistant message.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::reply::send_prompt;

/// Each chip submits its label as if the user had typed it.
#[component]
pub fn SuggestionChips(suggestions: Vec<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="suggestions">
            {suggestions
                .into_iter()
                .map(|label| {
                    let prompt = label.clone();
                    view! {
                        <button class="suggestions__chip" on:click=move |_| send_prompt(chat, &prompt)>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
