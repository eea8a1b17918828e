#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn send_prompt_appends_user_message_and_clears_draft() {
    let chat = RwSignal::new(ChatState::new(0));
    chat.update(|state| state.input = "draft".to_owned());

    send_prompt(chat, "  Plan a city tour ");

    chat.with_untracked(|state| {
        assert_eq!(state.conversation.len(), 2);
        let last = state.conversation.last().expect("user message");
        assert!(last.is_user());
        assert_eq!(last.text, "Plan a city tour");
        assert!(state.input.is_empty());
        assert!(state.is_typing());
    });
}

#[test]
fn blank_prompt_keeps_draft_and_conversation() {
    let chat = RwSignal::new(ChatState::new(0));
    chat.update(|state| state.input = "   ".to_owned());

    send_draft(chat);

    chat.with_untracked(|state| {
        assert_eq!(state.conversation.len(), 1);
        assert_eq!(state.input, "   ");
        assert!(!state.is_typing());
    });
}

#[test]
fn send_draft_submits_composer_text() {
    let chat = RwSignal::new(ChatState::new(0));
    chat.update(|state| state.input = "Budget travel options".to_owned());

    send_draft(chat);

    chat.with_untracked(|state| {
        assert_eq!(state.conversation.last().map(|m| m.text.as_str()), Some("Budget travel options"));
        assert!(state.input.is_empty());
    });
}
