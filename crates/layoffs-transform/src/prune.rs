//! Null audit and removal of rows without any measured outcome.

use layoffs_model::{NullAudit, StagingTable};

/// Count the nulls the cleaner deliberately keeps.
///
/// Null measures are informative (the source simply did not report them) and
/// are never imputed. Rows with both measures null are counted here and then
/// removed by [`prune_uninformative`].
pub fn audit_nulls(table: &StagingTable) -> NullAudit {
    let mut audit = NullAudit::default();
    for row in table.iter() {
        if row.total_laid_off.is_none() {
            audit.total_laid_off += 1;
        }
        if row.percentage_laid_off.is_none() {
            audit.percentage_laid_off += 1;
        }
        if row.funds_raised_millions.is_none() {
            audit.funds_raised_millions += 1;
        }
        if row.is_uninformative() {
            audit.both_measures += 1;
        }
    }
    audit
}

/// Drop rows where both `total_laid_off` and `percentage_laid_off` are null.
pub fn prune_uninformative(mut table: StagingTable) -> StagingTable {
    table.rows.retain(|row| !row.is_uninformative());
    table
}

#[cfg(test)]
mod tests {
    use layoffs_model::{EventDate, StagingRecord};

    use super::*;

    fn row(line: u64, total: Option<i64>, pct: Option<f64>) -> StagingRecord {
        StagingRecord {
            source_line: line,
            row_num: Some(1),
            company: "Acme".to_string(),
            location: None,
            industry: Some("Retail".to_string()),
            total_laid_off: total,
            percentage_laid_off: pct,
            event_date: EventDate::Missing,
            stage: None,
            country: None,
            funds_raised_millions: None,
        }
    }

    fn sample() -> StagingTable {
        StagingTable::new(vec![
            row(2, Some(100), None),
            row(3, None, Some(0.1)),
            row(4, None, None),
            row(5, Some(5), Some(0.5)),
        ])
    }

    #[test]
    fn audit_counts_retained_nulls() {
        let audit = audit_nulls(&sample());
        assert_eq!(
            audit,
            NullAudit {
                total_laid_off: 2,
                percentage_laid_off: 2,
                funds_raised_millions: 4,
                both_measures: 1,
            }
        );
    }

    #[test]
    fn prune_keeps_partially_null_rows() {
        let table = prune_uninformative(sample());
        let lines: Vec<u64> = table.iter().map(|r| r.source_line).collect();
        assert_eq!(lines, vec![2, 3, 5]);
        assert_eq!(table.rows[0].percentage_laid_off, None);
        assert_eq!(table.rows[1].total_laid_off, None);
    }
}
