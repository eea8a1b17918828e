use super::*;
use assistant::MessageId;
use clap::CommandFactory;

fn chips() -> Vec<String> {
    vec!["Hiking trails".to_owned(), "Guided tours".to_owned()]
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn resolve_input_ignores_blank_lines() {
    assert_eq!(resolve_input("   ", &chips()), None);
}

#[test]
fn resolve_input_picks_numbered_suggestion() {
    assert_eq!(resolve_input(" 2 ", &chips()), Some("Guided tours".to_owned()));
}

#[test]
fn resolve_input_passes_out_of_range_numbers_through() {
    assert_eq!(resolve_input("0", &chips()), Some("0".to_owned()));
    assert_eq!(resolve_input("3", &chips()), Some("3".to_owned()));
}

#[test]
fn resolve_input_trims_free_text() {
    assert_eq!(resolve_input("  beach please ", &[]), Some("beach please".to_owned()));
}

#[test]
fn render_message_includes_time_sender_and_chips() {
    // 2024-01-01T13:05:00Z
    let msg = Message::assistant(MessageId(1), "Hi", 1_704_114_300_000, &["A", "B"]);
    assert_eq!(render_message(&msg, 0), "[13:05] TravelBot: Hi\n  [1] A  [2] B\n");
}

#[test]
fn render_user_message_has_no_chip_line() {
    let msg = Message::user(MessageId(2), "Rome", 0);
    assert_eq!(render_message(&msg, 60), "[01:00] You: Rome\n");
}

#[test]
fn remote_reply_decodes_server_payload() {
    let value = serde_json::json!({
        "topic": "city",
        "reply": "City exploration is exciting!",
        "suggestions": ["Top attractions"],
        "typing_delay_ms": 1500
    });
    let reply: RemoteReply = serde_json::from_value(value).expect("reply");
    assert_eq!(reply.topic, "city");
    assert_eq!(reply.typing_delay_ms, 1500);
    assert_eq!(reply.suggestions, vec!["Top attractions".to_owned()]);
}

#[test]
fn deliver_remote_records_server_text_with_next_id() {
    let mut conversation = Conversation::new(0);
    let pending = conversation.submit("beach", 10).expect("pending");
    let remote: RemoteReply = serde_json::from_value(serde_json::json!({
        "topic": "beach",
        "reply": "Served remotely",
        "suggestions": ["Show me hotels"],
        "typing_delay_ms": 1500
    }))
    .expect("decode");

    let reply = deliver_remote(&mut conversation, pending, &remote, 1_510);
    assert_eq!(reply.id, MessageId(3));
    assert_eq!(reply.sender, Sender::Assistant);
    assert_eq!(reply.text, "Served remotely");
    assert_eq!(reply.suggestions, vec!["Show me hotels".to_owned()]);

    let last = conversation.last().expect("reply in transcript");
    assert_eq!(last.text, "Served remotely");
    assert!(!conversation.is_typing());
}
