// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_NAME: &str = "interesting";
pub const DEFAULT_RESULTS: usize = 5;
pub const DEFAULT_TITLE: &str = "The most frequent interesting words";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Number of ranked words to report.
    pub results: usize,
    /// Words appended to the built-in stop-word set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Base name of the report; `.html` is appended.
    pub name: String,
    pub title: String,
    pub open_browser: bool,
    pub include_metadata: bool,
}

impl Config {
    /// Layers built-in defaults, an optional TOML file and
    /// `INTERESTING_WORDS_<SECTION>__<KEY>` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder()
            .set_default("analysis.results", DEFAULT_RESULTS as u64)
            .and_then(|b| b.set_default("analysis.extra_stop_words", Vec::<String>::new()))
            .and_then(|b| b.set_default("output.name", DEFAULT_OUTPUT_NAME))
            .and_then(|b| b.set_default("output.title", DEFAULT_TITLE))
            .and_then(|b| b.set_default("output.open_browser", true))
            .and_then(|b| b.set_default("output.include_metadata", true))
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("INTERESTING_WORDS")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("analysis.extra_stop_words")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            analysis: AnalysisConfig {
                results: DEFAULT_RESULTS,
                extra_stop_words: vec![],
            },
            output: OutputConfig {
                name: DEFAULT_OUTPUT_NAME.to_string(),
                title: DEFAULT_TITLE.to_string(),
                open_browser: true,
                include_metadata: true,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_result_count(self.analysis.results)?;
        Validator::validate_output_name(&self.output.name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.results, 5);
        assert_eq!(config.output.name, "interesting");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[analysis]
results = 12
extra_stop_words = ["chapter", "page"]

[output]
name = "corpus"
open_browser = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.analysis.results, 12);
        assert_eq!(config.analysis.extra_stop_words, vec!["chapter", "page"]);
        assert_eq!(config.output.name, "corpus");
        assert!(!config.output.open_browser);
        assert_eq!(config.output.title, DEFAULT_TITLE);
        assert!(config.output.include_metadata);
    }

    #[test]
    fn test_validate_rejects_zero_results() {
        let mut config = Config::default_config();
        config.analysis.results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_path_in_name() {
        let mut config = Config::default_config();
        config.output.name = "../report".to_string();
        assert!(config.validate().is_err());

        config.output.name = "   ".to_string();
        assert!(config.validate().is_err());
    }
}
