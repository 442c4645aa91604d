#![deny(unsafe_code)]

//! Industry synonym table loading.
//!
//! The synonym table is the cleaner's only externalized configuration. It is
//! a CSV with a `canonical,variants` header, where `variants` is a
//! `;`-separated list:
//!
//! ```text
//! canonical,variants
//! Crypto,Crypto Currency;CryptoCurrency
//! Retail,
//! ```

pub mod error;
pub mod paths;
pub mod synonyms;

pub use crate::error::StandardsError;
pub use crate::paths::{SYNONYMS_ENV_VAR, default_synonyms_path};
pub use crate::synonyms::{load_default_catalog, load_industry_catalog, parse_industry_catalog};
