// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod browser;
pub mod logging;
pub mod validation;

pub use browser::open_in_browser;
pub use validation::Validator;
