//! Industry synonym collapse.

use std::collections::BTreeMap;

use layoffs_model::{IndustryCatalog, StagingTable};
use tracing::debug;

/// Outcome of collapsing industry synonyms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryRewrite {
    pub rewritten: usize,
    /// Values the catalog does not know, kept as-is.
    pub unrecognized: BTreeMap<String, usize>,
}

/// Rewrite every known industry to its canonical spelling.
pub fn normalize_industries(
    mut table: StagingTable,
    catalog: &IndustryCatalog,
) -> (StagingTable, IndustryRewrite) {
    let mut outcome = IndustryRewrite::default();
    for row in &mut table.rows {
        let Some(industry) = row.industry.as_mut() else {
            continue;
        };
        match catalog.canonical_for(industry) {
            Some(canonical) if canonical != industry.as_str() => {
                debug!(line = row.source_line, from = %industry, to = canonical, "industry rewritten");
                *industry = canonical.to_string();
                outcome.rewritten += 1;
            }
            Some(_) => {}
            None => {
                *outcome.unrecognized.entry(industry.clone()).or_insert(0) += 1;
            }
        }
    }
    (table, outcome)
}

#[cfg(test)]
mod tests {
    use layoffs_model::{EventDate, IndustryTerm, StagingRecord};

    use super::*;

    fn catalog() -> IndustryCatalog {
        let mut catalog = IndustryCatalog::new();
        catalog
            .add_term(IndustryTerm {
                canonical: "Crypto".to_string(),
                variants: vec!["Crypto Currency".to_string(), "CryptoCurrency".to_string()],
            })
            .unwrap();
        catalog
            .add_term(IndustryTerm {
                canonical: "Retail".to_string(),
                variants: vec![],
            })
            .unwrap();
        catalog
    }

    fn table(industries: &[Option<&str>]) -> StagingTable {
        industries
            .iter()
            .enumerate()
            .map(|(idx, industry)| StagingRecord {
                source_line: idx as u64 + 2,
                row_num: Some(1),
                company: format!("C{idx}"),
                location: None,
                industry: industry.map(str::to_string),
                total_laid_off: Some(1),
                percentage_laid_off: None,
                event_date: EventDate::Missing,
                stage: None,
                country: None,
                funds_raised_millions: None,
            })
            .collect()
    }

    #[test]
    fn collapses_synonyms() {
        let (table, outcome) = normalize_industries(
            table(&[
                Some("Crypto Currency"),
                Some("CryptoCurrency"),
                Some("Crypto"),
                Some("retail"),
                None,
                Some("Fin-Tech"),
                Some("Fin-Tech"),
            ]),
            &catalog(),
        );
        let values: Vec<Option<&str>> = table.iter().map(|r| r.industry.as_deref()).collect();
        assert_eq!(
            values,
            vec![
                Some("Crypto"),
                Some("Crypto"),
                Some("Crypto"),
                Some("Retail"),
                None,
                Some("Fin-Tech"),
                Some("Fin-Tech"),
            ]
        );
        assert_eq!(outcome.rewritten, 3);
        assert_eq!(outcome.unrecognized.get("Fin-Tech"), Some(&2));
    }
}
