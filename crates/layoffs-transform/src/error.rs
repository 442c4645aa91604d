use layoffs_model::{Column, ModelError};
use thiserror::Error;

/// Errors raised while cleaning. Each names the source line of the offending record.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("line {line}: company is missing")]
    MissingCompany { line: u64 },

    #[error("line {line}: {column} value '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: Column,
        value: String,
    },

    #[error("line {line}: date '{value}' is not in month/day/year format")]
    DateParse { line: u64, value: String },

    #[error(
        "line {line}: company '{company}' has several industries to fill from: {candidate_list}",
        candidate_list = .candidates.join(", ")
    )]
    AmbiguousFill {
        line: u64,
        company: String,
        candidates: Vec<String>,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
