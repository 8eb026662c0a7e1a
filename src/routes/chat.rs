use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{ChatMessage, Course, Intent},
    services::chat,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Assistant reply: the AI-side message plus ranked suggestions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: ChatMessage,
    pub suggestions: Vec<Course>,
    pub intent: Intent,
}

/// Handles one user message to the scripted assistant
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
    }

    let inner = state.inner.read().await;
    let reply = chat::respond(&request.message, inner.catalog.courses());

    tracing::info!(
        intent = ?reply.intent,
        suggestions = reply.suggestions.len(),
        "Chat message classified"
    );

    Ok(Json(ChatResponse {
        message: ChatMessage::from_ai(reply.message),
        suggestions: reply.suggestions,
        intent: reply.intent,
    }))
}

/// Conversation openers shown in an empty chat
pub async fn starters() -> Json<Vec<String>> {
    Json(chat::conversation_starters())
}
