//! Error types for layoffs data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV (unbalanced quotes, ragged rows, invalid UTF-8).
    #[error("failed to parse CSV {path} (line {line}): {message}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Header does not name exactly the expected attributes.
    #[error(
        "schema mismatch in {path}: missing [{missing_list}], unexpected [{unexpected_list}]",
        missing_list = .missing.join(", "),
        unexpected_list = .unexpected.join(", ")
    )]
    SchemaMismatch {
        path: PathBuf,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, err: &csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::CsvParse {
            path: path.into(),
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
