use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_starts_with_greeting_and_empty_input() {
    let state = ChatState::new(0);
    assert_eq!(state.conversation.len(), 1);
    assert!(state.input.is_empty());
    assert!(!state.is_typing());
}

// =============================================================
// Composer helpers
// =============================================================

#[test]
fn can_send_requires_non_blank_input() {
    let mut state = ChatState::new(0);
    assert!(!state.can_send());
    state.input = "   ".to_owned();
    assert!(!state.can_send());
    state.input = " Tokyo ".to_owned();
    assert!(state.can_send());
}

#[test]
fn take_input_clears_draft() {
    let mut state = ChatState::new(0);
    state.input = "Rome".to_owned();
    assert_eq!(state.take_input(), "Rome");
    assert!(state.input.is_empty());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_clears_draft_when_message_is_appended() {
    let mut state = ChatState::new(0);
    state.input = "leftover".to_owned();

    let pending = state.submit("Beach vacation", 5).expect("pending");
    assert_eq!(pending.prompt(), "Beach vacation");
    assert!(state.input.is_empty());
    assert!(state.is_typing());
}

#[test]
fn submit_blank_text_keeps_draft() {
    let mut state = ChatState::new(0);
    state.input = "Rome".to_owned();

    assert!(state.submit("  ", 5).is_none());
    assert_eq!(state.input, "Rome");
    assert_eq!(state.conversation.len(), 1);
}

#[test]
fn submit_draft_sends_and_empties_composer() {
    let mut state = ChatState::new(0);
    state.input = " Mountain hiking ".to_owned();

    let pending = state.submit_draft(5).expect("pending");
    assert_eq!(pending.prompt(), "Mountain hiking");
    assert!(state.input.is_empty());
    assert_eq!(state.conversation.len(), 2);
}

#[test]
fn submit_draft_restores_blank_draft() {
    let mut state = ChatState::new(0);
    state.input = "   ".to_owned();

    assert!(state.submit_draft(5).is_none());
    assert_eq!(state.input, "   ");
    assert!(!state.is_typing());
}
