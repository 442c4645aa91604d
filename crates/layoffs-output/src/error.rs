//! Output error types.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build cleaned table")]
    Frame(#[source] PolarsError),

    #[error("failed to write CSV to {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),

    /// The temp file was written but could not be moved into place.
    #[error("failed to move {temp_path} to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
