//! Business attributes of a layoff record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine business attributes, in canonical CSV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Company,
    Location,
    Industry,
    TotalLaidOff,
    PercentageLaidOff,
    Date,
    Stage,
    Country,
    FundsRaisedMillions,
}

impl Column {
    /// All columns in the order they appear in the source export.
    pub const ALL: [Column; 9] = [
        Column::Company,
        Column::Location,
        Column::Industry,
        Column::TotalLaidOff,
        Column::PercentageLaidOff,
        Column::Date,
        Column::Stage,
        Column::Country,
        Column::FundsRaisedMillions,
    ];

    /// CSV header name.
    pub fn name(self) -> &'static str {
        match self {
            Column::Company => "company",
            Column::Location => "location",
            Column::Industry => "industry",
            Column::TotalLaidOff => "total_laid_off",
            Column::PercentageLaidOff => "percentage_laid_off",
            Column::Date => "date",
            Column::Stage => "stage",
            Column::Country => "country",
            Column::FundsRaisedMillions => "funds_raised_millions",
        }
    }

    /// Resolve a header (case-insensitive, surrounding whitespace ignored).
    pub fn from_header(header: &str) -> Option<Column> {
        let trimmed = header.trim().trim_matches('\u{feff}');
        Column::ALL
            .into_iter()
            .find(|column| column.name().eq_ignore_ascii_case(trimmed))
    }

    /// Whether an empty cell in this column reads as null.
    ///
    /// `industry` keeps empty strings so the fill step can treat them explicitly.
    pub fn empty_is_null(self) -> bool {
        !matches!(self, Column::Industry | Column::Company)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
