use axum::{Json, extract::State};

use crate::AppState;
use crate::data::models::{GenerateRequest, GenerateResponse, ServiceError};

pub async fn generate_sign(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ServiceError> {
    Ok(Json(state.coordinator.generate(payload).await?))
}
