//! The chat page: sidebar plus the main conversation column.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::sidebar::Sidebar;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <Sidebar/>
            <main class="chat-main">
                <ChatHeader/>
                <MessageList/>
                <Composer/>
            </main>
        </div>
    }
}
