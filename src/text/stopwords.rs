// file: src/text/stopwords.rs
// description: immutable stop-word set and the filter that applies it
// reference: https://docs.rs/stop-words (nltk english list)

use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

/// High-frequency words that carry no signal for corpus triage.
pub const SUPPLEMENTARY_STOP_WORDS: &[&str] = &[
    "new", "make", "time", "work", "one", "know", "say", "let", "care", "last", "way", "like",
    "get", "keep", "give", "could", "come", "well", "need", "see", "go", "take", "must", "many",
    "also", "u", "want", "think", "today", "every", "even", "told", "two", "long", "tell", "call",
    "back", "first", "hard", "day", "end", "look", "saw",
];

#[derive(Debug, Clone)]
pub struct StopWordFilter {
    stop_words: HashSet<String>,
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWordFilter {
    /// English stop-words plus the supplementary list.
    pub fn english() -> Self {
        Self::english_with_extras::<&str>(&[])
    }

    pub fn english_with_extras<S: AsRef<str>>(extras: &[S]) -> Self {
        let stop_words = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_string().to_lowercase())
            .chain(SUPPLEMENTARY_STOP_WORDS.iter().map(|s| s.to_string()))
            .chain(extras.iter().map(|s| s.as_ref().trim().to_lowercase()))
            .filter(|s| !s.is_empty())
            .collect();

        Self { stop_words }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Drops stop-words while keeping the survivors in their original order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
