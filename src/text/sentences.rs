// file: src/text/sentences.rs
// description: punkt sentence boundary detection over blank-line separated paragraphs
// reference: https://docs.rs/punkt (port of the NLTK punkt tokenizer)

use lazy_static::lazy_static;
use punkt::params::Standard;
use punkt::{SentenceTokenizer, TrainingData};
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex =
        Regex::new(r"\r?\n\s*\n").expect("PARAGRAPH_BREAK regex is valid");
    static ref ENGLISH: TrainingData = TrainingData::english();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Splits `text` into trimmed, non-empty sentences in document order.
    ///
    /// Blank lines always end a sentence; single line breaks inside a
    /// paragraph are treated as spaces so hard-wrapped text stays whole.
    pub fn split(&self, text: &str) -> Vec<String> {
        PARAGRAPH_BREAK
            .split(text)
            .map(|paragraph| paragraph.replace("\r\n", " ").replace('\n', " "))
            .flat_map(|paragraph| {
                SentenceTokenizer::<Standard>::new(&paragraph, &*ENGLISH)
                    .map(str::trim)
                    .filter(|sentence| !sentence.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
