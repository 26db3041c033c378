// file: src/analysis/locator.rs
// description: finds the sentences and files in which each ranked word appears
// reference: https://docs.rs/regex (case-insensitive whole-word matching)

use crate::analysis::ranker::FrequencyEntry;
use crate::corpus::Document;
use crate::error::Result;
use crate::report::escape_html;
use crate::text::SentenceSplitter;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub word: String,
    pub file_name: String,
    /// HTML-safe sentence text with the matched word wrapped in `<b>`.
    pub sentence: String,
}

#[derive(Debug, Default, Clone)]
pub struct OccurrenceMap {
    by_word: HashMap<String, Vec<Occurrence>>,
}

impl OccurrenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, occurrence: Occurrence) {
        self.by_word
            .entry(occurrence.word.clone())
            .or_default()
            .push(occurrence);
    }

    /// Occurrences in file order, then sentence order; empty when the word was never located.
    pub fn get(&self, word: &str) -> &[Occurrence] {
        self.by_word.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_word.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SentenceLocator {
    splitter: SentenceSplitter,
}

struct WordPattern<'a> {
    word: &'a str,
    regex: Regex,
}

impl SentenceLocator {
    pub fn new() -> Self {
        Self {
            splitter: SentenceSplitter::new(),
        }
    }

    /// Only the already-ranked words are searched for; nothing new is discovered here.
    pub fn locate(&self, documents: &[Document], ranked: &[FrequencyEntry]) -> Result<OccurrenceMap> {
        let patterns = ranked
            .iter()
            .map(|entry| {
                Ok(WordPattern {
                    word: entry.word.as_str(),
                    regex: word_pattern(&entry.word)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut occurrences = OccurrenceMap::new();

        for document in documents {
            let sentences = self.splitter.split(&document.content);
            debug!(
                "Searching {} sentences in {}",
                sentences.len(),
                document.file_name
            );

            for pattern in &patterns {
                for sentence in &sentences {
                    if let Some(marked) = highlight(&pattern.regex, sentence, pattern.word) {
                        occurrences.push(Occurrence {
                            word: pattern.word.to_string(),
                            file_name: document.file_name.clone(),
                            sentence: marked,
                        });
                    }
                }
            }
        }

        Ok(occurrences)
    }
}

/// Case-insensitive `\bword\b`.
pub fn word_pattern(word: &str) -> Result<Regex> {
    let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
        .case_insensitive(true)
        .build()?;
    Ok(regex)
}

/// Wraps the first match in `<b>` using the ranked spelling and escapes the rest.
pub fn highlight(pattern: &Regex, sentence: &str, word: &str) -> Option<String> {
    let found = pattern.find(sentence)?;

    Some(format!(
        "{}<b>{}</b>{}",
        escape_html(&sentence[..found.start()]),
        escape_html(word),
        escape_html(&sentence[found.end()..])
    ))
}
