//! Data model for the layoffs dataset cleaner.
//!
//! - **columns**: the nine business attributes and their CSV header names
//! - **record**: raw rows, staging rows and the final cleaned record
//! - **table**: the staging table the cleaning steps operate on
//! - **industry**: the canonical industry catalog (synonym table)
//! - **options**: policies for ambiguous fills and unparseable dates
//! - **report**: per-step counts, rejections and profiling output

pub mod columns;
pub mod error;
pub mod industry;
pub mod numeric;
pub mod options;
pub mod record;
pub mod report;
pub mod table;

pub use columns::Column;
pub use error::{ModelError, Result};
pub use industry::{IndustryCatalog, IndustryClass, IndustryTerm};
pub use numeric::{format_numeric, parse_f64, parse_i64};
pub use options::{CleaningOptions, FillPolicy, InvalidDatePolicy};
pub use record::{EventDate, LayoffRecord, RawRecord, StagingRecord, is_null_token};
pub use report::{
    CleaningReport, IndustryProfileEntry, NullAudit, RejectedRecord, StepReport,
};
pub use table::StagingTable;
