use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::Request;

use super::*;
use crate::state::test_helpers;
use assistant::Sender;

async fn rejected_body(raw: &'static str) -> JsonRejection {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat/reply")
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .expect("request");
    Json::<ReplyRequest>::from_request(request, &()).await.unwrap_err()
}

async fn error_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json error body")
}

#[tokio::test]
async fn reply_returns_topic_text_and_chips() {
    let state = test_helpers::test_app_state();
    let Json(body) = reply(State(state.clone()), Ok(Json(ReplyRequest { text: "  Ocean views ".into() })))
        .await
        .expect("reply");

    assert_eq!(body.topic, Topic::Beach);
    assert!(body.reply.starts_with("Great choice!"));
    // Chips use the narrower rule: "ocean" is not "beach".
    assert_eq!(body.suggestions[0], "Tell me more");
    assert_eq!(body.typing_delay_ms, 1500);
    assert_eq!(state.replies_served(), 1);
}

#[tokio::test]
async fn reply_rejects_blank_text_with_bad_request() {
    let state = test_helpers::test_app_state();
    let err = reply(State(state.clone()), Ok(Json(ReplyRequest { text: "   ".into() })))
        .await
        .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.replies_served(), 0);
    assert!(error_json(response).await["error"].is_string());
}

#[tokio::test]
async fn reply_missing_text_field_is_json_unprocessable_entity() {
    let state = test_helpers::test_app_state();
    let rejection = rejected_body("{}").await;
    let err = reply(State(state.clone()), Err(rejection)).await.unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error_json(response).await["error"].is_string());
    assert_eq!(state.replies_served(), 0);
}

#[tokio::test]
async fn reply_malformed_body_is_json_bad_request() {
    let rejection = rejected_body("{\"text\":").await;
    let err = reply(State(test_helpers::test_app_state()), Err(rejection)).await.unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_json(response).await["error"].is_string());
}

#[tokio::test]
async fn greeting_is_first_assistant_message() {
    let Json(body) = greeting(State(test_helpers::test_app_state())).await;
    assert_eq!(body.message.sender, Sender::Assistant);
    assert_eq!(body.message.id.0, 1);
    assert_eq!(body.message.suggestions.len(), 4);
}

#[tokio::test]
async fn catalog_lists_sidebar_content() {
    let Json(body) = catalog().await;
    assert_eq!(body.quick_actions.len(), 4);
    assert_eq!(body.destinations.len(), 4);
    assert_eq!(body.tips.len(), 3);
}

#[test]
fn reply_response_serializes_topic_lowercase() {
    let body = ReplyResponse { topic: Topic::City, reply: "x", suggestions: &["a"], typing_delay_ms: 0 };
    let value = serde_json::to_value(body).expect("json");
    assert_eq!(value["topic"], serde_json::json!("city"));
    assert_eq!(value["suggestions"], serde_json::json!(["a"]));
}
