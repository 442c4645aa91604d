//! CLI library components for the layoffs cleaner.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod types;
