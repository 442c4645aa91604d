use layoffs_model::StagingTable;

/// Strip trailing periods (and whitespace left before them). Empty results become null.
pub fn normalize_country(value: &str) -> Option<String> {
    let stripped = value.trim_end_matches(|ch: char| ch == '.' || ch.is_whitespace());
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

pub fn normalize_countries(mut table: StagingTable) -> (StagingTable, usize) {
    let mut changed = 0usize;
    for row in &mut table.rows {
        let Some(country) = row.country.as_deref() else {
            continue;
        };
        let normalized = normalize_country(country);
        if normalized.as_deref() != Some(country) {
            row.country = normalized;
            changed += 1;
        }
    }
    (table, changed)
}
