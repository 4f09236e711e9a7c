use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::ai::ProviderError;
use crate::features::dictionary::SaveError;

/// Errors shared by the translate/chat/generate API handlers.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("AI not configured")]
    NotConfigured,
    #[error("{0}")]
    Validation(String),
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("Storage error: {0}")]
    Storage(#[from] SaveError),
    #[error("Asset write error: {0}")]
    Asset(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original: String,
    pub translation: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub ai_configured: bool,
    pub ai_method: String,
    pub app: String,
}
