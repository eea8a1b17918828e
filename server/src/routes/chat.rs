//! JSON API over the keyword rules.
//!
//! Stateless: each request is answered from the prompt alone. Clients that
//! want the typing effect wait `typing_delay_ms` before showing the reply.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use assistant::catalog::{CATALOG, Catalog};
use assistant::clock::now_ms;
use assistant::{Conversation, Message, PromptError, Topic, rules};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub topic: Topic,
    pub reply: &'static str,
    pub suggestions: &'static [&'static str],
    pub typing_delay_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: Message,
    pub typing_delay_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error mapped to an HTTP status and a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Prompt(PromptError::Empty) => StatusCode::BAD_REQUEST,
            Self::Body(rejection) => rejection.status(),
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

fn delay_ms(state: &AppState) -> u64 {
    u64::try_from(state.typing_delay.as_millis()).unwrap_or(u64::MAX)
}

/// `POST /api/chat/reply`: canned reply and chips for one prompt.
///
/// Body rejections are answered with the same JSON error shape as blank prompts.
pub async fn reply(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let Json(req) = payload?;
    let prompt = rules::normalize_prompt(&req.text)?;
    let answer = rules::respond(prompt);
    let total = state.record_reply();
    tracing::info!(topic = %answer.topic, len = prompt.len(), total, "chat reply");

    Ok(Json(ReplyResponse {
        topic: answer.topic,
        reply: answer.text,
        suggestions: answer.suggestions,
        typing_delay_ms: delay_ms(&state),
    }))
}

/// `GET /api/chat/greeting`: the message every conversation opens with.
pub async fn greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    let conversation = Conversation::new(now_ms());
    let message = conversation.messages()[0].clone();
    Json(GreetingResponse { message, typing_delay_ms: delay_ms(&state) })
}

/// `GET /api/catalog`: sidebar content: quick actions, destinations, tips.
pub async fn catalog() -> Json<Catalog> {
    Json(CATALOG)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
