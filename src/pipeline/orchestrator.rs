// file: src/pipeline/orchestrator.rs
// description: drives a corpus run from directory validation to the written report
// reference: sequential state machine over the analysis stages

use crate::analysis::{FrequencyEntry, FrequencyRanker, OccurrenceMap, SentenceLocator};
use crate::config::Config;
use crate::corpus::{Document, FileScanner, ScannedFile};
use crate::error::{PipelineError, Result};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::report::{ReportMetadata, ReportRenderer};
use crate::text::{StopWordFilter, TextNormalizer};
use crate::utils::{Validator, open_in_browser};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    ParsingArgs,
    ValidatingDirectory,
    ValidatingFileList,
    Processing,
    Rendering,
    Done,
    Error,
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input_dir: PathBuf,
    /// Directory the report is written to; the working directory for the CLI.
    pub output_dir: PathBuf,
    pub output_name: String,
    pub results: usize,
    pub title: String,
    pub include_metadata: bool,
    pub open_browser: bool,
    pub show_progress: bool,
    pub colored: bool,
}

impl PipelineOptions {
    pub fn from_config(input_dir: PathBuf, config: &Config) -> Self {
        Self {
            input_dir,
            output_dir: PathBuf::from("."),
            output_name: config.output.name.clone(),
            results: config.analysis.results,
            title: config.output.title.clone(),
            include_metadata: config.output.include_metadata,
            open_browser: config.output.open_browser,
            show_progress: true,
            colored: true,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.output_name.trim()))
    }
}

/// Everything learned about the corpus before any output is produced.
#[derive(Debug)]
pub struct Analysis {
    pub documents: Vec<Document>,
    pub failed_files: Vec<String>,
    pub ranked: Vec<FrequencyEntry>,
    pub occurrences: OccurrenceMap,
    pub stats: PipelineStats,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub output_path: PathBuf,
    pub ranked: Vec<FrequencyEntry>,
    pub stats: PipelineStats,
    pub browser_opened: bool,
}

pub struct Pipeline {
    options: PipelineOptions,
    scanner: FileScanner,
    normalizer: TextNormalizer,
    stop_words: StopWordFilter,
    ranker: FrequencyRanker,
    locator: SentenceLocator,
    renderer: ReportRenderer,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, stop_words: StopWordFilter) -> Self {
        let renderer = ReportRenderer::new(options.title.clone());
        debug!("{} stop-words in effect", stop_words.len());

        Self {
            options,
            scanner: FileScanner::new(),
            normalizer: TextNormalizer::new(),
            stop_words,
            ranker: FrequencyRanker::new(),
            locator: SentenceLocator::new(),
            renderer,
            state: PipelineState::ParsingArgs,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs every stage; on failure the state is `Error` and no report is written.
    pub fn run(&mut self) -> Result<PipelineOutcome> {
        match self.execute() {
            Ok(outcome) => {
                self.transition(PipelineState::Done);
                Ok(outcome)
            }
            Err(err) => {
                self.transition(PipelineState::Error);
                Err(err)
            }
        }
    }

    fn execute(&mut self) -> Result<PipelineOutcome> {
        Validator::validate_result_count(self.options.results)?;
        Validator::validate_output_name(&self.options.output_name)?;

        self.transition(PipelineState::ValidatingDirectory);
        Validator::validate_directory(&self.options.input_dir)?;

        self.transition(PipelineState::ValidatingFileList);
        let files = self.scanner.scan_directory(&self.options.input_dir)?;
        Validator::validate_file_list(&files, &self.options.input_dir)?;

        self.transition(PipelineState::Processing);
        let analysis = self.analyze(&files)?;

        self.transition(PipelineState::Rendering);
        let metadata = self.options.include_metadata.then(|| {
            ReportMetadata::new(
                self.options.input_dir.display().to_string(),
                analysis
                    .documents
                    .iter()
                    .map(|d| d.file_name.clone())
                    .collect(),
                analysis.failed_files.clone(),
            )
        });
        let html = self
            .renderer
            .render(&analysis.ranked, &analysis.occurrences, metadata.as_ref());

        let output_path = self.options.output_path();
        fs::write(&output_path, html).map_err(|source| PipelineError::FileOperation {
            path: output_path.clone(),
            source,
        })?;
        info!("Report written to {}", output_path.display());

        let browser_opened = self.options.open_browser && self.open_report(&output_path);

        Ok(PipelineOutcome {
            output_path,
            ranked: analysis.ranked,
            stats: analysis.stats,
            browser_opened,
        })
    }

    fn open_report(&self, path: &Path) -> bool {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        match open_in_browser(&target) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not open the report in a browser: {}", e);
                false
            }
        }
    }

    /// Reads, normalizes and ranks the corpus, then locates the ranked words.
    pub fn analyze(&self, files: &[ScannedFile]) -> Result<Analysis> {
        let mut tracker = if self.options.show_progress {
            ProgressTracker::with_color(files.len(), self.options.colored)
        } else {
            ProgressTracker::hidden()
        };

        let mut documents = Vec::with_capacity(files.len());
        let mut failed_files = Vec::new();
        let mut tokens: Vec<String> = Vec::new();

        for file in files {
            tracker.set_message(file.file_name.clone());

            match Document::load(file) {
                Ok(document) => {
                    let lemmas = self.stop_words.filter(self.normalizer.normalize(&document.content));
                    debug!("{}: {} interesting tokens", document.file_name, lemmas.len());
                    tracker.file_processed(file.size, lemmas.len());
                    tokens.extend(lemmas);
                    documents.push(document);
                }
                Err(e) => {
                    warn!("Skipping unreadable file: {}", e);
                    tracker.file_failed();
                    failed_files.push(file.file_name.clone());
                }
            }
        }

        let ranked = self.ranker.rank(&tokens, self.options.results)?;
        info!(
            "Ranked top {} of {} interesting tokens",
            ranked.len(),
            tokens.len()
        );

        let occurrences = self.locator.locate(&documents, &ranked)?;
        tracker.set_occurrences(occurrences.total());

        Ok(Analysis {
            documents,
            failed_files,
            ranked,
            occurrences,
            stats: tracker.finish(),
        })
    }
}
