// file: src/corpus/document.rs
// description: in-memory text document read once and shared by every pipeline pass
// reference: internal data structures

use crate::corpus::scanner::ScannedFile;
use crate::error::{PipelineError, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub file_name: String,
    pub content: String,
}

impl Document {
    pub fn new(path: PathBuf, file_name: String, content: String) -> Self {
        Self {
            path,
            file_name,
            content,
        }
    }

    /// Reads the file as UTF-8; invalid encodings surface as `FileOperation`.
    pub fn load(file: &ScannedFile) -> Result<Self> {
        let content =
            fs::read_to_string(&file.path).map_err(|source| PipelineError::FileOperation {
                path: file.path.clone(),
                source,
            })?;

        Ok(Self::new(file.path.clone(), file.file_name.clone(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scanned(dir: &TempDir, name: &str) -> ScannedFile {
        ScannedFile {
            path: dir.path().join(name),
            file_name: name.to_string(),
            size: 0,
        }
    }

    #[test]
    fn test_load_document() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "The fox runs.").unwrap();

        let doc = Document::load(&scanned(&temp, "a.txt")).unwrap();

        assert_eq!(doc.file_name, "a.txt");
        assert_eq!(doc.content, "The fox runs.");
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let err = Document::load(&scanned(&temp, "bad.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::FileOperation { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(Document::load(&scanned(&temp, "gone.txt")).is_err());
    }
}
