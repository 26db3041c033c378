// file: src/corpus/mod.rs
// description: corpus discovery and loading module exports
// reference: internal module structure

pub mod document;
pub mod scanner;

pub use document::Document;
pub use scanner::{FileScanner, ScannedFile};
