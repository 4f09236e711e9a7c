use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::json;

use crate::features::ai::clients::{
    GeneratedImage, ImageSynthesis, ProviderError, TextCompletion,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

/// Client for the Gemini generateContent REST API, covering both text
/// completion and image synthesis.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        body: serde_json::Value,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!("{API_BASE}/{model}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!("{status}: {detail}")));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.generate_content(&self.model, body).await?;
        let text = response.text();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ImageSynthesis for GeminiClient {
    async fn synthesize(
        &self,
        prompt: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<GeneratedImage>, ProviderError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!("[language: {language}] {prompt}") }] }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "candidateCount": count
            }
        });

        let response = self.generate_content(IMAGE_MODEL, body).await?;
        let images = response.images()?;
        if images.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(images)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
    }

    fn text(&self) -> String {
        self.parts()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    fn images(&self) -> Result<Vec<GeneratedImage>, ProviderError> {
        self.parts()
            .filter_map(|p| p.inline_data.as_ref())
            .map(|data| {
                BASE64
                    .decode(&data.data)
                    .map(GeneratedImage::new)
                    .map_err(|e| ProviderError::Api(format!("Invalid image payload: {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "مرحبا " }, { "text": "بك" }] }
            }]
        }))
        .unwrap();

        assert_eq!(response.text(), "مرحبا بك");
    }

    #[test]
    fn response_images_decode_inline_data() {
        let encoded = BASE64.encode([1u8, 2, 3]);
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "data": encoded } }] }
            }]
        }))
        .unwrap();

        let images = response.images().unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn empty_candidates_yield_empty_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_empty());
        assert!(response.images().unwrap().is_empty());
    }
}
