// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

//! Ranks the most frequent interesting words across a directory of plain
//! text files and renders them, with the sentences they occur in, as an
//! HTML report.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod text;
pub mod utils;

pub use analysis::{FrequencyEntry, FrequencyRanker, Occurrence, OccurrenceMap, SentenceLocator};
pub use config::{AnalysisConfig, Config, OutputConfig};
pub use corpus::{Document, FileScanner, ScannedFile};
pub use error::{PipelineError, Result};
pub use pipeline::{
    Analysis, Pipeline, PipelineOptions, PipelineOutcome, PipelineState, PipelineStats,
    ProgressTracker,
};
pub use report::{ReportMetadata, ReportRenderer};
pub use text::{Lemmatizer, SentenceSplitter, StopWordFilter, TextNormalizer};
pub use utils::Validator;
