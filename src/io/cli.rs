//! Command-line interface for batch scoring PNG files

use crate::algorithm::executor::{PatternFilter, ScorerConfig};
use crate::algorithm::strategy::FastPath;
use crate::analysis::reduction::OtsuReducer;
use crate::analysis::spectrum::FftSpectrumBuilder;
use crate::io::configuration::{CSV_HEADER, DEFAULT_PATTERN_CUTOFF};
use crate::io::error::{Result, ScoreError, invalid_input};
use crate::io::image::load_luma;
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Distance-field strategy as exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FastPathArg {
    /// Per-cell loops
    Scalar,
    /// Broadcast whole-array operations
    #[default]
    Vectorized,
}

impl From<FastPathArg> for FastPath {
    fn from(arg: FastPathArg) -> Self {
        match arg {
            FastPathArg::Scalar => Self::Scalar,
            FastPathArg::Vectorized => Self::Vectorized,
        }
    }
}

#[derive(Parser)]
#[command(name = "patternscore")]
#[command(
    author,
    version,
    about = "Score images on how pattern-like they appear"
)]
/// Command-line arguments for the scoring tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Score above which a file is reported as pattern-like
    #[arg(short, long, default_value_t = DEFAULT_PATTERN_CUTOFF)]
    pub cutoff: f64,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write results as CSV to the given path
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Distance-field implementation strategy
    #[arg(long, value_enum, default_value = "vectorized")]
    pub fast_path: FastPathArg,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of scoring one file
#[derive(Debug, Clone)]
pub struct ScoredFile {
    /// Path of the scored image
    pub path: PathBuf,
    /// Pattern-likeness score in `[0, 1]`
    pub score: f64,
}

/// Orchestrates batch scoring of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Score files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, scoring, or
    /// report writing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let config = ScorerConfig {
            fast_path: self.cli.fast_path.into(),
            ..ScorerConfig::default()
        };
        let filter = PatternFilter::new(config);
        let reducer = OtsuReducer;
        let builder = FftSpectrumBuilder;

        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let luma = load_luma(file)?;
            let score = filter.score_luma(&luma, &reducer, &builder)?;

            self.report_line(&format!(
                "{}\t{score:.4}\t{}",
                file.display(),
                self.verdict(score)
            ));

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }

            results.push(ScoredFile {
                path: file.clone(),
                score,
            });
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if let Some(csv_path) = self.cli.csv.clone() {
            self.write_csv(&csv_path, &results)?;
        }

        Ok(())
    }

    const fn verdict(&self, score: f64) -> &'static str {
        if score > self.cli.cutoff {
            "pattern-like"
        } else {
            "not-pattern-like"
        }
    }

    // Scores are the product of the run, not diagnostics
    #[allow(clippy::print_stdout)]
    fn report_line(&self, line: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.report(line);
        } else {
            println!("{line}");
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_input(&"target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            self.collect_from_directory(&self.cli.target, &mut files)?;
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input(&"target must be a PNG file or directory"))
        }
    }

    fn collect_from_directory(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in std::fs::read_dir(dir).map_err(|e| ScoreError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source: e,
        })? {
            let path = entry
                .map_err(|e| ScoreError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read directory entry",
                    source: e,
                })?
                .path();

            if path.is_dir() {
                if self.cli.recursive {
                    self.collect_from_directory(&path, files)?;
                }
            } else if path.extension().and_then(|s| s.to_str()) == Some("png") {
                files.push(path);
            }
        }

        Ok(())
    }

    fn write_csv(&self, csv_path: &Path, results: &[ScoredFile]) -> Result<()> {
        let mut lines = Vec::with_capacity(results.len() + 1);
        lines.push(CSV_HEADER.to_string());

        for result in results {
            lines.push(format!(
                "{},{:.6},{}",
                result.path.display(),
                result.score,
                result.score > self.cli.cutoff
            ));
        }

        let mut contents = lines.join("\n");
        contents.push('\n');

        std::fs::write(csv_path, contents).map_err(|e| ScoreError::FileSystem {
            path: csv_path.to_path_buf(),
            operation: "write report",
            source: e,
        })
    }
}
