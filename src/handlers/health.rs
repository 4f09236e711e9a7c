use axum::{Json, extract::State};

use crate::AppState;
use crate::data::models::HealthResponse;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_configured: state.clients.ai_configured(),
        ai_method: state.clients.method.clone(),
        app: "Sign Language Assistant".to_string(),
    })
}
