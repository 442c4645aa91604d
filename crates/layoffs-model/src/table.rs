use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{LayoffRecord, StagingRecord};

/// The working copy every cleaning step reads and returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagingTable {
    pub rows: Vec<StagingRecord>,
}

impl StagingTable {
    pub fn new(rows: Vec<StagingRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagingRecord> {
        self.rows.iter()
    }

    /// Whether any row still carries a rank.
    pub fn has_rank(&self) -> bool {
        self.rows.iter().any(|row| row.row_num.is_some())
    }

    /// Convert every row into the final schema.
    pub fn into_records(self) -> Result<Vec<LayoffRecord>> {
        self.rows
            .into_iter()
            .map(StagingRecord::into_layoff_record)
            .collect()
    }
}

impl FromIterator<StagingRecord> for StagingTable {
    fn from_iter<I: IntoIterator<Item = StagingRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
