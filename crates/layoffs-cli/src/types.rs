use std::path::PathBuf;

use layoffs_model::{CleaningOptions, CleaningReport};

/// Everything one `clean` invocation needs.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Defaults to `<input stem>_cleaned.csv` beside the input.
    pub output: Option<PathBuf>,
    /// Defaults to the configured synonym table.
    pub synonyms: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub options: CleaningOptions,
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            synonyms: None,
            report: None,
            options: CleaningOptions::default(),
            dry_run: false,
        }
    }
}

#[derive(Debug)]
pub struct CleanRun {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: CleaningReport,
}
