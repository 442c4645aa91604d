//! Output writers for the cleaned layoffs table.
//!
//! - **CSV**: the cleaned records, built as a Polars frame
//! - **JSON**: the cleaning report

mod error;
mod frame;
mod writer;

pub use error::{OutputError, Result};
pub use frame::records_to_frame;
pub use writer::{write_cleaned_csv, write_report_json};
