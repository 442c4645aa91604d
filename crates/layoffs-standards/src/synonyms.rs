use std::path::Path;

use layoffs_model::{IndustryCatalog, IndustryTerm};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::StandardsError;
use crate::paths::default_synonyms_path;

#[derive(Debug, Deserialize)]
struct SynonymRow {
    canonical: String,
    #[serde(default)]
    variants: String,
}

fn split_variants(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a synonym table from CSV text.
///
/// `path` is only used in error messages.
pub fn parse_industry_catalog(
    contents: &[u8],
    path: &Path,
) -> Result<IndustryCatalog, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(contents);

    let csv_error = |e: csv::Error| StandardsError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut catalog = IndustryCatalog::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: SynonymRow = record.deserialize(Some(&headers)).map_err(csv_error)?;
        let canonical = row.canonical.trim_matches('\u{feff}').trim();
        if canonical.is_empty() {
            return Err(StandardsError::InvalidEntry {
                path: path.to_path_buf(),
                line,
                message: "canonical name is empty".to_string(),
            });
        }
        let term = IndustryTerm {
            canonical: canonical.to_string(),
            variants: split_variants(&row.variants),
        };
        debug!(
            canonical = %term.canonical,
            variants = term.variants.len(),
            "synonym entry"
        );
        catalog
            .add_term(term)
            .map_err(|e| StandardsError::InvalidEntry {
                path: path.to_path_buf(),
                line,
                message: e.to_string(),
            })?;
    }
    Ok(catalog)
}

/// Load the synonym table at `path`.
pub fn load_industry_catalog(path: &Path) -> Result<IndustryCatalog, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let catalog = parse_industry_catalog(&bytes, path)?;
    info!(
        path = %path.display(),
        canonical_count = catalog.len(),
        "loaded industry synonyms"
    );
    Ok(catalog)
}

/// Load the synonym table from its default location.
pub fn load_default_catalog() -> Result<IndustryCatalog, StandardsError> {
    load_industry_catalog(&default_synonyms_path())
}
