use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::features::ai::gemini::GeminiClient;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Empty response from provider")]
    EmptyResponse,
}

/// External text-completion collaborator: one composed prompt in, one raw
/// completion out. No streaming, no structured output.
#[async_trait::async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// External image-synthesis collaborator.
#[async_trait::async_trait]
pub trait ImageSynthesis: Send + Sync {
    async fn synthesize(
        &self,
        prompt: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<GeneratedImage>, ProviderError>;
}

/// One generated image, held in memory until saved to its asset path.
pub struct GeneratedImage {
    bytes: Vec<u8>,
}

impl GeneratedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Write the image to disk, creating intermediate directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, &self.bytes)
    }
}

/// Explicitly constructed provider handles, built once at startup and passed
/// into the handlers as state. Either collaborator may be absent: translation
/// and chat then report "AI not configured", while asset synthesis degrades
/// to a dictionary-only merge.
#[derive(Clone)]
pub struct ServiceClients {
    pub completion: Option<Arc<dyn TextCompletion>>,
    pub images: Option<Arc<dyn ImageSynthesis>>,
    pub method: String,
}

impl ServiceClients {
    /// Build clients from `GEMINI_API_KEY` / `GEMINI_MODEL`. Missing key
    /// means a fully unconfigured (degraded) service.
    pub fn from_env() -> Self {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => {
                let model = std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash-001".to_string());
                let client = Arc::new(GeminiClient::new(key, model.clone()));
                tracing::info!(%model, "AI configured: Gemini");
                Self {
                    completion: Some(client.clone()),
                    images: Some(client),
                    method: format!("Gemini ({model})"),
                }
            }
            _ => {
                tracing::warn!("no GEMINI_API_KEY set, AI disabled");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            completion: None,
            images: None,
            method: "None".to_string(),
        }
    }

    pub fn ai_configured(&self) -> bool {
        self.completion.is_some()
    }
}
