//! Synonym table path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the synonym table location.
pub const SYNONYMS_ENV_VAR: &str = "LAYOFFS_SYNONYMS_FILE";

/// Get the default synonym table path.
///
/// Resolution order:
/// 1. `LAYOFFS_SYNONYMS_FILE` environment variable
/// 2. `config/industry_synonyms.csv` relative to the workspace root
pub fn default_synonyms_path() -> PathBuf {
    if let Ok(path) = std::env::var(SYNONYMS_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/industry_synonyms.csv")
}
