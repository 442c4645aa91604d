//! Distinct industry values of a source table, for maintaining the synonym table.

use std::collections::HashMap;

use layoffs_model::{IndustryCatalog, IndustryProfileEntry, RawRecord, is_null_token};

/// Count every distinct industry and classify it against the catalog.
///
/// Empty and `NULL` cells are grouped under `None`. Entries are sorted by
/// count (descending), then by value.
pub fn industry_profile(
    rows: &[RawRecord],
    catalog: &IndustryCatalog,
) -> Vec<IndustryProfileEntry> {
    let mut counts: HashMap<Option<&str>, usize> = HashMap::new();
    for row in rows {
        let value = row.industry.trim();
        let key = if value.is_empty() || is_null_token(value) {
            None
        } else {
            Some(value)
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut entries: Vec<IndustryProfileEntry> = counts
        .into_iter()
        .map(|(value, count)| IndustryProfileEntry {
            value: value.map(str::to_string),
            count,
            class: value.map(|v| catalog.classify(v)),
            canonical: value
                .and_then(|v| catalog.canonical_for(v))
                .map(str::to_string),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries
}
