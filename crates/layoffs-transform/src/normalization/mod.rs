//! In-place value normalization.
//!
//! - **industry**: synonym collapse through the industry catalog
//! - **country**: trailing-period removal
//! - **datetime**: `month/day/year` text into dates

pub mod country;
pub mod datetime;
pub mod industry;

pub use country::{normalize_countries, normalize_country};
pub use datetime::{DateNormalization, normalize_dates, parse_event_date};
pub use industry::{IndustryRewrite, normalize_industries};
