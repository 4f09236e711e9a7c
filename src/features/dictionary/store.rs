use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::data::models::DictionaryDocument;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Read error: {0}")]
    Read(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Write error: {0}")]
    Write(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON-file-backed store for the sign-language dictionary.
///
/// The document is re-read from disk for every operation and written back as
/// a whole-document overwrite. An internal mutex serializes each
/// load-mutate-save sequence; callers that mutate must hold the guard from
/// [`DictionaryStore::lock`] across the full sequence. Concurrent writers in
/// other processes are not protected against.
pub struct DictionaryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the store-wide write lock for a load-mutate-save sequence.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read and parse the backing file, keeping the failure cause.
    pub fn try_load(&self) -> Result<DictionaryDocument, LoadError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the dictionary, substituting an empty document when the backing
    /// file is missing or corrupt. Never fails.
    pub fn load(&self) -> DictionaryDocument {
        self.try_load().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), %err, "dictionary unreadable, using empty document");
            DictionaryDocument::default()
        })
    }

    /// Overwrite the backing file with the full document, pretty-printed.
    /// Arabic text is written as-is; serde_json does not escape non-ASCII.
    /// Write failures propagate: losing a write silently is worse than
    /// failing loudly.
    pub fn save(&self, doc: &DictionaryDocument) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::WordEntry;

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            word_en: Some("hello".to_string()),
            category: Some("greetings".to_string()),
            sign_description: Some("يد مرفوعة".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn load_missing_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("missing.json"));

        let doc = store.load();
        assert!(doc.words.is_empty());
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn load_corrupt_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        fs::write(&path, "{not json").unwrap();
        let store = DictionaryStore::new(&path);

        assert!(store.try_load().is_err());
        let doc = store.load();
        assert!(doc.words.is_empty());
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));
        let doc = DictionaryDocument {
            words: vec![entry("مرحبا"), entry("شكراً")],
            categories: vec!["greetings".to_string(), "emergency".to_string()],
        };

        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn save_preserves_arabic_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));
        let doc = DictionaryDocument {
            words: vec![entry("مرحبا")],
            categories: vec![],
        };

        store.save(&doc).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("مرحبا"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("nested/data/dict.json"));

        store.save(&DictionaryDocument::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn unchanged_save_load_cycle_is_structurally_equal() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));
        let original = DictionaryDocument {
            words: vec![entry("مرحبا"), entry("نجدة")],
            categories: vec!["emergency".to_string()],
        };
        store.save(&original).unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), original);
    }
}
