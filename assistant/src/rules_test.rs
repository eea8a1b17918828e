use super::*;

// =============================================================
// normalize_prompt
// =============================================================

#[test]
fn normalize_prompt_trims_surrounding_whitespace() {
    assert_eq!(normalize_prompt("  Beach vacation \n"), Ok("Beach vacation"));
}

#[test]
fn normalize_prompt_rejects_blank_input() {
    assert_eq!(normalize_prompt(""), Err(PromptError::Empty));
    assert_eq!(normalize_prompt(" \t\n "), Err(PromptError::Empty));
}

// =============================================================
// reply_topic
// =============================================================

#[test]
fn reply_topic_matches_each_keyword_family() {
    assert_eq!(reply_topic("Ocean views please"), Topic::Beach);
    assert_eq!(reply_topic("I love hiking"), Topic::Mountain);
    assert_eq!(reply_topic("somewhere URBAN"), Topic::City);
    assert_eq!(reply_topic("something cheap"), Topic::Budget);
    assert_eq!(reply_topic("When should I go?"), Topic::Timing);
    assert_eq!(reply_topic("Cultural tour"), Topic::General);
}

#[test]
fn reply_topic_prefers_earlier_rules() {
    assert_eq!(reply_topic("beach or mountain"), Topic::Beach);
    assert_eq!(reply_topic("cheap city break"), Topic::City);
    assert_eq!(reply_topic("budget dates"), Topic::Budget);
}

#[test]
fn reply_topic_uses_plain_substring_matching() {
    // "season" contains "sea".
    assert_eq!(reply_topic("shoulder season"), Topic::Beach);
    // "ethnicity" contains "city".
    assert_eq!(reply_topic("ethnicity"), Topic::City);
}

#[test]
fn quick_action_prompts_route_to_expected_topics() {
    assert_eq!(reply_topic("Find me a beach vacation"), Topic::Beach);
    assert_eq!(reply_topic("Plan a city tour"), Topic::City);
    assert_eq!(reply_topic("Adventure trip ideas"), Topic::Mountain);
    assert_eq!(reply_topic("Budget travel options"), Topic::Budget);
}

// =============================================================
// suggestion_topic
// =============================================================

#[test]
fn suggestion_topic_only_knows_three_keywords() {
    assert_eq!(suggestion_topic("BEACH"), Topic::Beach);
    assert_eq!(suggestion_topic("mountain lodge"), Topic::Mountain);
    assert_eq!(suggestion_topic("city lights"), Topic::City);
    assert_eq!(suggestion_topic("ocean"), Topic::General);
    assert_eq!(suggestion_topic("hiking"), Topic::General);
}

#[test]
fn adventure_prompt_mixes_mountain_reply_with_general_chips() {
    let reply = respond("Adventure trip ideas");
    assert_eq!(reply.topic, Topic::Mountain);
    assert!(reply.text.starts_with("Adventure awaits!"));
    assert_eq!(reply.suggestions, Topic::General.suggestions());
}

// =============================================================
// canned content
// =============================================================

#[test]
fn every_topic_offers_four_chips() {
    for topic in [Topic::Beach, Topic::Mountain, Topic::City, Topic::Budget, Topic::Timing, Topic::General] {
        assert_eq!(topic.suggestions().len(), 4, "{topic}");
        assert!(!topic.reply().is_empty());
    }
}

#[test]
fn reply_for_and_suggestions_for_agree_with_respond() {
    let prompt = "Show me hotels by the beach";
    let reply = respond(prompt);
    assert_eq!(reply.text, reply_for(prompt));
    assert_eq!(reply.suggestions, suggestions_for(prompt));
    assert_eq!(reply.suggestions[0], "Show me hotels");
}

#[test]
fn general_reply_asks_for_preferences() {
    assert!(reply_for("hello there").contains("travel preferences"));
}

#[test]
fn topic_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Topic::Timing).expect("json"), serde_json::json!("timing"));
}
