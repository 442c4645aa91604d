//! Policies controlling how the cleaner resolves ambiguous input.

use serde::{Deserialize, Serialize};

/// How to pick an industry when a company has several non-null candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Lexicographically smallest candidate.
    #[default]
    Smallest,
    /// Candidate that appears first in table order.
    First,
    /// More than one distinct candidate is an error.
    Strict,
}

/// What to do with a date that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDatePolicy {
    /// Abort the whole run.
    #[default]
    Fail,
    /// Drop the record and list it in the report.
    Reject,
}

/// Options for a cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningOptions {
    pub fill_policy: FillPolicy,
    pub invalid_dates: InvalidDatePolicy,
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_policy(mut self, policy: FillPolicy) -> Self {
        self.fill_policy = policy;
        self
    }

    pub fn with_invalid_dates(mut self, policy: InvalidDatePolicy) -> Self {
        self.invalid_dates = policy;
        self
    }
}
