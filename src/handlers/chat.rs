//! Chat relay HTTP handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

use crate::llm::{Message, ProviderKind};
use crate::response;
use crate::server::AppState;

#[derive(Serialize)]
pub struct ChatReply {
    message: String,
}

/// POST /api/openai
///
/// Body: a JSON array of `{"role": ..., "content": ...}` messages, oldest
/// first. Replies with `{"message": <generated text>}`.
pub async fn openai_chat(
    State(state): State<AppState>,
    Json(messages): Json<Vec<Message>>,
) -> Response {
    relay(&state, ProviderKind::OpenAi, &messages).await
}

/// POST /api/gemini
///
/// Same request and response shape as the OpenAI endpoint; the conversation
/// is relayed as a history-seeded Gemini chat turn.
pub async fn gemini_chat(
    State(state): State<AppState>,
    Json(messages): Json<Vec<Message>>,
) -> Response {
    relay(&state, ProviderKind::Gemini, &messages).await
}

/// Validate the conversation, split off the current turn, and forward it to
/// the requested provider.
async fn relay(state: &AppState, kind: ProviderKind, messages: &[Message]) -> Response {
    let Some((current, history)) = messages.split_last() else {
        return response::bad_request("conversation must contain at least one message");
    };

    let Some(provider) = state.providers.get(kind) else {
        return response::internal_error(format!(
            "Provider '{kind}' not configured. Check API key environment variable."
        ));
    };

    match provider.generate(history, current).await {
        Ok(text) => (StatusCode::OK, Json(ChatReply { message: text })).into_response(),
        Err(e) => {
            warn!("{kind} generation failed: {e}");
            response::bad_gateway(format!("LLM request failed: {e}"))
        }
    }
}
