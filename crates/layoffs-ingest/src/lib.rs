//! Layoffs data ingestion.
//!
//! Reads the raw layoffs export into a [`RawTable`] without interpreting any
//! value. The header must name exactly the nine business attributes (any
//! order, any case); anything else is a schema mismatch.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use layoffs_ingest::read_raw_table;
//!
//! let table = read_raw_table(Path::new("layoffs.csv"))?;
//! println!("{} rows", table.rows.len());
//! ```

mod csv_table;
mod error;

pub use csv_table::{RawTable, read_raw_table, read_raw_table_from_reader};
pub use error::{IngestError, Result};
