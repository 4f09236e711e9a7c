use serde::{Deserialize, Serialize};

/// The whole persisted dictionary: one JSON document per deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One sign-language dictionary record. `word` acts as the natural key
/// during merges; no uniqueness is enforced by the store itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facial_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl WordEntry {
    /// Transliteration to match against; falls back to the headword.
    pub fn word_en(&self) -> &str {
        self.word_en.as_deref().unwrap_or(&self.word)
    }
}

#[derive(Debug, Deserialize)]
pub struct DictionaryParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryResponse {
    pub words: Vec<WordEntry>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EmergencyResponse {
    pub phrases: Vec<WordEntry>,
}
