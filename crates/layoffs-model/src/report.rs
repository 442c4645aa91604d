use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::industry::IndustryClass;

/// Row counts for one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub name: String,
    pub rows_before: usize,
    pub rows_after: usize,
    /// Cells rewritten in place by the step.
    pub values_changed: usize,
}

impl StepReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// A record dropped instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub line: u64,
    pub company: String,
    pub value: String,
    pub reason: String,
}

/// Nulls retained in the measured fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullAudit {
    pub total_laid_off: usize,
    pub percentage_laid_off: usize,
    pub funds_raised_millions: usize,
    pub both_measures: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub steps: Vec<StepReport>,
    pub rejected: Vec<RejectedRecord>,
    /// Industry values the catalog does not know, with occurrence counts.
    pub unrecognized_industries: BTreeMap<String, usize>,
    pub retained_nulls: NullAudit,
}

impl CleaningReport {
    pub fn rows_removed(&self) -> usize {
        self.input_rows.saturating_sub(self.output_rows)
    }

    pub fn step(&self, name: &str) -> Option<&StepReport> {
        self.steps.iter().find(|step| step.name == name)
    }
}

/// One distinct industry value seen in a source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryProfileEntry {
    /// Source value; `None` for null or empty.
    pub value: Option<String>,
    pub count: usize,
    pub class: Option<IndustryClass>,
    pub canonical: Option<String>,
}
