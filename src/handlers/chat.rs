use axum::{Json, extract::State};

use crate::AppState;
use crate::data::models::{ChatRequest, ChatResponse, ServiceError};
use crate::features::ai::prompts;

/// Assistant chat for deaf/hard-of-hearing users. Emergency routing lives in
/// the instruction template, not in this handler.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServiceError> {
    let completion = state
        .clients
        .completion
        .as_ref()
        .ok_or(ServiceError::NotConfigured)?;
    if payload.message.is_empty() {
        return Err(ServiceError::Validation("No message provided".to_string()));
    }

    let prompt = prompts::chat_prompt(&payload.message);
    let response = completion.complete(&prompt).await?;

    Ok(Json(ChatResponse {
        success: true,
        response,
        model: state.clients.method.clone(),
    }))
}
