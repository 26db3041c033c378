// file: src/corpus/scanner.rs
// description: Discovery of the plain-text files that make up a corpus
// reference: https://docs.rs/walkdir

use crate::error::{PipelineError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const TEXT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Basename used when reporting occurrences.
    pub file_name: String,
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Lists the `*.txt` files that are direct children of `root`, sorted by name.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| PipelineError::FileOperation {
                path: root.to_path_buf(),
                source: e.into(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEXT_EXTENSION) {
                debug!("Skipping non-text file: {}", path.display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let file_name = entry.file_name().to_string_lossy().to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                file_name,
                size,
            });
        }

        info!("Found {} text files", files.len());
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_directory_only_text_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "second").unwrap();
        fs::write(temp.path().join("a.txt"), "first").unwrap();
        fs::write(temp.path().join("notes.md"), "# skipped").unwrap();

        let files = FileScanner::new().scan_directory(temp.path()).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(files[0].size, 5);
    }

    #[test]
    fn test_scan_directory_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.txt"), "hidden").unwrap();
        fs::write(temp.path().join("top.txt"), "visible").unwrap();

        let files = FileScanner::new().scan_directory(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "top.txt");
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        let files = FileScanner::new().scan_directory(temp.path()).unwrap();
        assert!(files.is_empty());
    }
}
