use crate::data::models::{DictionaryDocument, WordEntry};

pub struct SearchEngine;

impl SearchEngine {
    /// Case-insensitive substring filter over `word` and `word_en`.
    ///
    /// An empty query returns every entry unfiltered. A full linear scan is
    /// fine here: dictionaries hold tens to low hundreds of entries.
    pub fn filter_words(doc: &DictionaryDocument, query: &str) -> Vec<WordEntry> {
        if query.is_empty() {
            return doc.words.clone();
        }

        let needle = query.to_lowercase();
        doc.words
            .iter()
            .filter(|entry| {
                entry.word.to_lowercase().contains(&needle)
                    || entry.word_en().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Entries tagged with the `emergency` category, in document order.
    pub fn emergency_phrases(doc: &DictionaryDocument) -> Vec<WordEntry> {
        doc.words
            .iter()
            .filter(|entry| entry.category.as_deref() == Some("emergency"))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DictionaryDocument {
        DictionaryDocument {
            words: vec![
                WordEntry {
                    word: "مرحبا".to_string(),
                    word_en: Some("Marhaba".to_string()),
                    category: Some("greetings".to_string()),
                    ..Default::default()
                },
                WordEntry {
                    word: "نجدة".to_string(),
                    word_en: Some("Nagda".to_string()),
                    category: Some("emergency".to_string()),
                    ..Default::default()
                },
                WordEntry {
                    word: "شكراً".to_string(),
                    ..Default::default()
                },
            ],
            categories: vec!["greetings".to_string(), "emergency".to_string()],
        }
    }

    #[test]
    fn empty_query_returns_all_entries() {
        let doc = doc();
        assert_eq!(SearchEngine::filter_words(&doc, ""), doc.words);
    }

    #[test]
    fn matches_native_headword_substring() {
        let results = SearchEngine::filter_words(&doc(), "مرح");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "مرحبا");
    }

    #[test]
    fn matches_transliteration_case_insensitively() {
        let results = SearchEngine::filter_words(&doc(), "nAgDa");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "نجدة");
    }

    #[test]
    fn missing_word_en_falls_back_to_headword() {
        let results = SearchEngine::filter_words(&doc(), "شكر");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "شكراً");
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(SearchEngine::filter_words(&doc(), "xyz").is_empty());
    }

    #[test]
    fn emergency_filter_selects_only_emergency_category() {
        let phrases = SearchEngine::emergency_phrases(&doc());
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].word, "نجدة");
    }
}
