use std::path::PathBuf;
use std::sync::Arc;

use crate::data::models::{GenerateRequest, GenerateResponse, ServiceError, WordEntry};
use crate::features::ai::prompts::sign_image_prompt;
use crate::features::ai::{ImageSynthesis, ProviderError};
use crate::features::dictionary::DictionaryStore;

const FACIAL_DEFAULT: &str = "neutral expression";
const DESCRIPTIVE_DEFAULT: &str = "per description";

/// Requests an illustrative image for a word, stores it at a deterministic
/// path and reconciles the outcome into the dictionary.
pub struct SynthesisCoordinator {
    store: Arc<DictionaryStore>,
    images: Option<Arc<dyn ImageSynthesis>>,
    generated_dir: PathBuf,
    public_prefix: String,
}

/// Derive the asset filename from the headword: spaces become underscores,
/// extension is fixed. Regenerating a word overwrites the same file instead
/// of accumulating orphans.
pub fn asset_filename(word: &str) -> String {
    format!("{}.png", word.replace(' ', "_"))
}

impl SynthesisCoordinator {
    pub fn new(
        store: Arc<DictionaryStore>,
        images: Option<Arc<dyn ImageSynthesis>>,
        generated_dir: impl Into<PathBuf>,
        public_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            images,
            generated_dir: generated_dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Generate an image for the request and merge the outcome into the
    /// dictionary. An unconfigured image service degrades to a merge without
    /// media; a hard provider failure propagates.
    pub async fn generate(&self, req: GenerateRequest) -> Result<GenerateResponse, ServiceError> {
        if req.word.is_empty() || req.description.is_empty() {
            return Err(ServiceError::Validation(
                "word and description are required".to_string(),
            ));
        }

        let mut image_url = None;
        let mut note = None;
        match &self.images {
            Some(client) => {
                let prompt = sign_image_prompt(&req.word, &req.description);
                let image = client
                    .synthesize(&prompt, 1, "ar")
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(ProviderError::EmptyResponse)?;

                let filename = asset_filename(&req.word);
                image.save(&self.generated_dir.join(&filename))?;
                image_url = Some(format!("{}/{}", self.public_prefix, filename));
            }
            None => {
                tracing::warn!(word = %req.word, "image service unavailable, merging without media");
                note = Some("Image generation unavailable; no image was produced.".to_string());
            }
        }

        let saved = self.merge(&req, image_url.as_deref()).await?;

        Ok(GenerateResponse {
            word: req.word,
            description: req.description,
            image_url,
            note,
            message: saved.then(|| "Dictionary updated".to_string()),
            saved,
        })
    }

    /// Reconcile the synthesis outcome into the dictionary under the store
    /// write lock. Matching is exact on the `word` natural key; an existing
    /// entry is updated in place, never duplicated. Returns whether the
    /// document was mutated (and therefore persisted).
    async fn merge(
        &self,
        req: &GenerateRequest,
        image_url: Option<&str>,
    ) -> Result<bool, ServiceError> {
        let _guard = self.store.lock().await;
        let mut doc = self.store.load();

        let mutated = if let Some(entry) = doc.words.iter_mut().find(|e| e.word == req.word) {
            match image_url {
                Some(url) => {
                    entry.media_url = Some(url.to_string());
                    entry.media_type = Some("image".to_string());
                    true
                }
                None => false,
            }
        } else if req.save {
            doc.words.push(WordEntry {
                word: req.word.clone(),
                word_en: req.word_en.clone(),
                category: Some("custom".to_string()),
                sign_description: Some(req.description.clone()),
                facial_expression: Some(
                    req.facial.clone().unwrap_or_else(|| FACIAL_DEFAULT.to_string()),
                ),
                hand_shape: Some(
                    req.hand_shape.clone().unwrap_or_else(|| DESCRIPTIVE_DEFAULT.to_string()),
                ),
                movement: Some(
                    req.movement.clone().unwrap_or_else(|| DESCRIPTIVE_DEFAULT.to_string()),
                ),
                media_type: image_url.map(|_| "image".to_string()),
                media_url: image_url.map(str::to_string),
            });
            true
        } else {
            false
        };

        if mutated {
            self.store.save(&doc)?;
        }
        Ok(mutated)
    }
}
