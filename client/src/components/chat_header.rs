//! Header bar above the conversation.

use assistant::catalog::{HEADER_STATUS, HEADER_TITLE, SUPPORT_BADGE};
use leptos::prelude::*;

#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__inner">
                <div class="chat-header__identity">
                    <div class="brand-mark brand-mark--compact">"✈"</div>
                    <div>
                        <h2 class="chat-header__title">{HEADER_TITLE}</h2>
                        <p class="chat-header__status">{HEADER_STATUS}</p>
                    </div>
                </div>
                <div class="chat-header__badge">"👥 " {SUPPORT_BADGE}</div>
            </div>
        </header>
    }
}
