// file: src/text/pos.rs
// description: coarse part-of-speech tagging of isolated tokens
// reference: lexicon lookup followed by suffix heuristics

use crate::text::lexicon::{ADJECTIVE_EXCEPTIONS, INVARIANT_WORDS, VERB_EXCEPTIONS};

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Noun,
    Verb,
    Adverb,
    /// Numbers, identifiers and anything else without a word class.
    Other,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tags a single lower-case token without sentence context.
    pub fn tag(&self, word: &str) -> PosTag {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return PosTag::Other;
        }

        if VERB_EXCEPTIONS.contains_key(word) {
            return PosTag::Verb;
        }

        if ADJECTIVE_EXCEPTIONS.contains_key(word) {
            return PosTag::Adjective;
        }

        let len = word.chars().count();

        if len > 4 && word.ends_with("ly") {
            PosTag::Adverb
        } else if (len > 4 && word.ends_with("ing")) || (len > 3 && word.ends_with("ed")) {
            PosTag::Verb
        } else if (len > 5 && word.ends_with("iest"))
            || (len > 4 && word.ends_with("ier") && !INVARIANT_WORDS.contains(word))
        {
            PosTag::Adjective
        } else if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| len > suffix.len() + 1 && word.ends_with(suffix))
        {
            PosTag::Adjective
        } else {
            PosTag::Noun
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms_are_verbs() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("was"), PosTag::Verb);
        assert_eq!(tagger.tag("went"), PosTag::Verb);
        assert_eq!(tagger.tag("running"), PosTag::Verb);
        assert_eq!(tagger.tag("jumped"), PosTag::Verb);
    }

    #[test]
    fn test_suffix_heuristics() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag("famous"), PosTag::Adjective);
        assert_eq!(tagger.tag("careful"), PosTag::Adjective);
        assert_eq!(tagger.tag("happiest"), PosTag::Adjective);
        assert_eq!(tagger.tag("happier"), PosTag::Adjective);
        assert_eq!(tagger.tag("soldier"), PosTag::Noun);
        assert_eq!(tagger.tag("better"), PosTag::Adjective);
    }

    #[test]
    fn test_default_is_noun() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("fox"), PosTag::Noun);
        assert_eq!(tagger.tag("jumps"), PosTag::Noun);
        assert_eq!(tagger.tag("bed"), PosTag::Noun);
        assert_eq!(tagger.tag("fly"), PosTag::Noun);
    }

    #[test]
    fn test_non_alphabetic_tokens() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("2024"), PosTag::Other);
        assert_eq!(tagger.tag("snake_case"), PosTag::Other);
        assert_eq!(tagger.tag(""), PosTag::Other);
    }
}
