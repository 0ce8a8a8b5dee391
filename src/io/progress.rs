//! Batch progress display for multi-file scoring runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Scoring: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch scoring
///
/// Small batches print their results directly with no bar; above the
/// individual-bar cutoff a single batch bar tracks the run, with the file
/// currently being scored shown as the bar message.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Initialize progress display based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Show the file currently being scored
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Record one completed file
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Print a result line without disturbing the bar
    // Result lines are the product of the run, not diagnostics
    #[allow(clippy::print_stdout)]
    pub fn report(&self, line: &str) {
        if self.batch_bar.is_some() {
            // Suspends bar drawing so the line lands above it intact
            self.multi_progress.suspend(|| println!("{line}"));
        } else {
            println!("{line}");
        }
    }

    /// Finish and clear the batch bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_and_clear();
        }
    }
}
