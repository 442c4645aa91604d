//! Cleaning steps for the layoffs dataset.
//!
//! The cleaner runs a fixed sequence of transformations over a staging copy
//! of the source rows:
//!
//! 1. **snapshot**: raw text rows into typed staging rows
//! 2. **deduplicate**: rank rows within identical partitions, keep rank 1
//! 3. **fill_industry**: empty industry to null, then fill from the same company
//! 4. **normalize_industry**: collapse synonyms through the industry catalog
//! 5. **normalize_country**: strip trailing periods
//! 6. **normalize_dates**: `month/day/year` text into dates
//! 7. **audit_nulls**: count retained nulls in the measured fields
//! 8. **prune_uninformative**: drop rows with neither measure
//! 9. **settle_duplicates**: rerun deduplication over the normalized rows
//! 10. **drop_rank**: clear the helper rank before conversion to final records
//!
//! Every step takes the table by value and returns it, so each one can be
//! tested without the others.

pub mod context;
pub mod dedupe;
pub mod error;
pub mod fill;
pub mod normalization;
pub mod pipeline;
pub mod profile;
pub mod prune;
pub mod snapshot;

pub use context::CleaningContext;
pub use dedupe::{assign_ranks, deduplicate, drop_rank};
pub use error::{Result, TransformError};
pub use fill::fill_missing_industries;
pub use normalization::{
    normalize_countries, normalize_dates, normalize_industries, parse_event_date,
};
pub use pipeline::{
    CleanOutput, CleaningPipeline, PipelineState, ProcessingStep, build_default_pipeline,
    clean_records,
};
pub use profile::industry_profile;
pub use prune::{audit_nulls, prune_uninformative};
pub use snapshot::snapshot;
