// file: src/text/normalizer.rs
// description: turns raw document text into an ordered sequence of lemmas
// reference: lower-case, strip non-word runs, tokenize, tag, lemmatize

use crate::text::lemmatizer::{LemmaMode, Lemmatizer};
use crate::text::pos::PosTagger;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").expect("NON_WORD regex is valid");
}

#[derive(Debug, Default, Clone)]
pub struct TextNormalizer {
    tagger: PosTagger,
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            tagger: PosTagger::new(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Order and duplicates are preserved; counting happens downstream.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lowered, " ");

        cleaned
            .unicode_words()
            .map(|token| self.lemmatize_token(token))
            .collect()
    }

    pub fn lemmatize_token(&self, token: &str) -> String {
        let mode = LemmaMode::from(self.tagger.tag(token));
        self.lemmatizer.lemmatize(token, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sentence() {
        let normalizer = TextNormalizer::new();
        let lemmas = normalizer.normalize("The quick brown fox jumps. The fox runs fast.");

        assert_eq!(
            lemmas,
            vec!["the", "quick", "brown", "fox", "jump", "the", "fox", "run", "fast"]
        );
    }

    #[test]
    fn test_punctuation_runs_are_removed() {
        let normalizer = TextNormalizer::new();
        let lemmas = normalizer.normalize("Foxes!!! -- cities; (churches)...");

        assert_eq!(lemmas, vec!["fox", "city", "church"]);
    }

    #[test]
    fn test_singular_and_plural_share_a_lemma() {
        let normalizer = TextNormalizer::new();
        let lemmas = normalizer.normalize("idea ideas area areas size sizes headache headaches");

        assert_eq!(
            lemmas,
            vec!["idea", "idea", "area", "area", "size", "size", "headache", "headache"]
        );
    }

    #[test]
    fn test_comparatives_reduce_to_the_adjective() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("happier happiest soldier"), vec!["happy", "happy", "soldier"]);
    }

    #[test]
    fn test_underscores_are_word_characters() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("snake_case value"), vec!["snake_case", "value"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::new();
        for word in ["run", "running", "fox", "foxes", "happy", "cities"] {
            let first = normalizer.normalize(word);
            let second = normalizer.normalize(&first.join(" "));
            assert_eq!(first, second, "{word}");
            assert_eq!(first, normalizer.normalize(word));
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(TextNormalizer::new().normalize("  ... !!").is_empty());
    }
}
