// file: src/analysis/mod.rs
// description: frequency ranking and sentence location module exports
// reference: internal module structure

pub mod locator;
pub mod ranker;

pub use locator::{Occurrence, OccurrenceMap, SentenceLocator};
pub use ranker::{FrequencyEntry, FrequencyRanker};
