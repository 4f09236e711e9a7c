use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub word_en: Option<String>,
    #[serde(default)]
    pub facial: Option<String>,
    #[serde(default)]
    pub hand_shape: Option<String>,
    #[serde(default)]
    pub movement: Option<String>,
    #[serde(default)]
    pub save: bool,
}

/// Best-effort synthesis outcome: the word/description are always echoed,
/// the other fields only when they apply.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub word: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub saved: bool,
}
