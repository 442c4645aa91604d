use std::collections::BTreeMap;

use layoffs_model::{FillPolicy, StagingTable};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Company -> distinct non-null industries, in order of first appearance.
fn industries_by_company(table: &StagingTable) -> BTreeMap<String, Vec<String>> {
    let mut lookup: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in table.iter() {
        let Some(industry) = row.industry.as_deref() else {
            continue;
        };
        let candidates = lookup.entry(row.company.clone()).or_default();
        if !candidates.iter().any(|c| c == industry) {
            candidates.push(industry.to_string());
        }
    }
    lookup
}

fn pick<'a>(candidates: &'a [String], policy: FillPolicy) -> Option<&'a String> {
    match policy {
        FillPolicy::Smallest => candidates.iter().min(),
        FillPolicy::First | FillPolicy::Strict => candidates.first(),
    }
}

/// Treat empty industries as null, then fill nulls from rows of the same company.
///
/// Returns the table and the number of cells changed (emptied plus filled).
pub fn fill_missing_industries(
    mut table: StagingTable,
    policy: FillPolicy,
) -> Result<(StagingTable, usize)> {
    let mut changed = 0usize;
    for row in &mut table.rows {
        if row.industry.as_deref().is_some_and(str::is_empty) {
            row.industry = None;
            changed += 1;
        }
    }

    let lookup = industries_by_company(&table);
    for row in &mut table.rows {
        if row.industry.is_some() {
            continue;
        }
        let Some(candidates) = lookup.get(&row.company) else {
            continue;
        };
        if policy == FillPolicy::Strict && candidates.len() > 1 {
            let mut candidates = candidates.clone();
            candidates.sort();
            return Err(TransformError::AmbiguousFill {
                line: row.source_line,
                company: row.company.clone(),
                candidates,
            });
        }
        if let Some(industry) = pick(candidates, policy) {
            debug!(line = row.source_line, industry = %industry, "filled industry");
            row.industry = Some(industry.clone());
            changed += 1;
        }
    }
    Ok((table, changed))
}

#[cfg(test)]
mod tests {
    use layoffs_model::{EventDate, StagingRecord};

    use super::*;

    fn row(line: u64, company: &str, industry: Option<&str>) -> StagingRecord {
        StagingRecord {
            source_line: line,
            row_num: Some(1),
            company: company.to_string(),
            location: None,
            industry: industry.map(str::to_string),
            total_laid_off: Some(1),
            percentage_laid_off: None,
            event_date: EventDate::Missing,
            stage: None,
            country: None,
            funds_raised_millions: None,
        }
    }

    fn industries(table: &StagingTable) -> Vec<Option<&str>> {
        table.iter().map(|r| r.industry.as_deref()).collect()
    }

    #[test]
    fn fills_from_same_company() {
        let table = StagingTable::new(vec![
            row(2, "Airbnb", Some("")),
            row(3, "Airbnb", Some("Travel")),
            row(4, "Carvana", None),
            row(5, "Bally's", None),
            row(6, "Carvana", Some("Transportation")),
        ]);
        let (table, changed) = fill_missing_industries(table, FillPolicy::Smallest).unwrap();
        assert_eq!(
            industries(&table),
            vec![
                Some("Travel"),
                Some("Travel"),
                Some("Transportation"),
                None,
                Some("Transportation")
            ]
        );
        // one emptied, two filled
        assert_eq!(changed, 3);
    }

    #[test]
    fn smallest_and_first_policies() {
        let rows = vec![
            row(2, "Acme", Some("Retail")),
            row(3, "Acme", Some("Crypto")),
            row(4, "Acme", None),
        ];
        let (smallest, _) =
            fill_missing_industries(StagingTable::new(rows.clone()), FillPolicy::Smallest)
                .unwrap();
        assert_eq!(smallest.rows[2].industry.as_deref(), Some("Crypto"));

        let (first, _) =
            fill_missing_industries(StagingTable::new(rows), FillPolicy::First).unwrap();
        assert_eq!(first.rows[2].industry.as_deref(), Some("Retail"));
    }

    #[test]
    fn strict_policy_rejects_ambiguity() {
        let rows = vec![
            row(2, "Acme", Some("Retail")),
            row(3, "Acme", Some("Crypto")),
            row(4, "Acme", None),
        ];
        let err = fill_missing_industries(StagingTable::new(rows), FillPolicy::Strict).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 4: company 'Acme' has several industries to fill from: Crypto, Retail"
        );
    }

    #[test]
    fn strict_policy_fills_single_candidate() {
        let rows = vec![row(2, "Acme", Some("Retail")), row(3, "Acme", None)];
        let (table, _) = fill_missing_industries(StagingTable::new(rows), FillPolicy::Strict).unwrap();
        assert_eq!(table.rows[1].industry.as_deref(), Some("Retail"));
    }
}
