// file: src/text/mod.rs
// description: text processing module exports
// reference: internal module structure

pub mod lemmatizer;
pub mod lexicon;
pub mod normalizer;
pub mod pos;
pub mod sentences;
pub mod stopwords;

pub use lemmatizer::{LemmaMode, Lemmatizer};
pub use normalizer::TextNormalizer;
pub use pos::{PosTag, PosTagger};
pub use sentences::SentenceSplitter;
pub use stopwords::{SUPPLEMENTARY_STOP_WORDS, StopWordFilter};
