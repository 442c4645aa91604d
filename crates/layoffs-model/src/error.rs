use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("line {line}: event date '{value}' was never normalized")]
    UnparsedDate { line: u64, value: String },
    #[error("industry catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
