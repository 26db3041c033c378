// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for a corpus run
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub tokens_counted: usize,
    pub total_bytes_processed: u64,
    pub occurrences_found: usize,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.tokens_counted as f64 / secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_processed as f64 / total as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} files read ({} failed), {} words counted, {} occurrences located in {:.2}s ({:.0} words/s)",
            self.files_processed,
            self.files_failed,
            self.tokens_counted,
            self.occurrences_found,
            self.duration.as_secs_f64(),
            self.tokens_per_second()
        )
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self {
            bar: create_progress_bar(total_files as u64, colored),
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    /// A tracker that never draws; used by tests and library callers.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn file_processed(&mut self, bytes: u64, tokens: usize) {
        self.stats.files_processed += 1;
        self.stats.total_bytes_processed += bytes;
        self.stats.tokens_counted += tokens;
        self.bar.inc(1);
    }

    pub fn file_failed(&mut self) {
        self.stats.files_failed += 1;
        self.bar.inc(1);
    }

    pub fn set_occurrences(&mut self, count: usize) {
        self.stats.occurrences_found = count;
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn finish(&mut self) -> PipelineStats {
        self.bar.finish_and_clear();
        self.stats.duration = self.start_time.elapsed();
        self.stats.clone()
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}
