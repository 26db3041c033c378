// file: src/utils/validation.rs
// description: input validation for the corpus directory, file list and output name
// reference: input validation patterns

use crate::corpus::ScannedFile;
use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::DirectoryNotFound(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(PipelineError::NotADirectory(path.to_path_buf()));
        }

        Ok(())
    }

    pub fn validate_file_list(files: &[ScannedFile], directory: &Path) -> Result<()> {
        if files.is_empty() {
            return Err(PipelineError::NoTextFiles(directory.to_path_buf()));
        }
        Ok(())
    }

    pub fn validate_result_count(count: usize) -> Result<()> {
        if count == 0 {
            return Err(PipelineError::Validation(
                "Number of results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_output_name(name: &str) -> Result<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(PipelineError::Validation(
                "Output name must not be empty".to_string(),
            ));
        }

        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(PipelineError::Validation(format!(
                "Output name must be a plain file name: {}",
                trimmed
            )));
        }

        Ok(())
    }
}
