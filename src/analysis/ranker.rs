// file: src/analysis/ranker.rs
// description: corpus-wide frequency counting and top-N selection
// reference: stable sort over first-appearance order

use crate::error::{PipelineError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Default)]
pub struct FrequencyRanker;

impl FrequencyRanker {
    pub fn new() -> Self {
        Self
    }

    /// Counts each distinct token, keeping them in order of first appearance.
    pub fn count<I, S>(&self, tokens: I) -> Vec<FrequencyEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match positions.get(token) {
                Some(&index) => entries[index].count += 1,
                None => {
                    positions.insert(token.to_string(), entries.len());
                    entries.push(FrequencyEntry::new(token, 1));
                }
            }
        }

        entries
    }

    /// Returns exactly `n` entries by descending count; ties keep first-appearance order.
    pub fn rank<I, S>(&self, tokens: I, n: usize) -> Result<Vec<FrequencyEntry>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = self.count(tokens);
        debug!("Counted {} distinct words", entries.len());

        if n > entries.len() {
            return Err(PipelineError::InsufficientWords {
                requested: n,
                available: entries.len(),
            });
        }

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        Ok(entries)
    }
}
