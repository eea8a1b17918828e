//! Three bouncing dots shown while the assistant "types".

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message--assistant">
            <div class="message__bubble typing">
                <span class="typing__dot" style="animation-delay: 0ms"></span>
                <span class="typing__dot" style="animation-delay: 150ms"></span>
                <span class="typing__dot" style="animation-delay: 300ms"></span>
            </div>
        </div>
    }
}
