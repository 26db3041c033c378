// file: src/report/mod.rs
// description: html report rendering module exports
// reference: internal module structure

pub mod escape;
pub mod html;
pub mod template;

pub use escape::escape_html;
pub use html::{ReportMetadata, ReportRenderer};
