//! Event date parsing.
//!
//! The source export writes dates as `month/day/year` with unpadded fields
//! (`1/5/2022`). ISO 8601 dates (`2022-01-05`) are accepted as well, which is
//! the spelling the cleaned output uses, so cleaned files can be fed back in.

use chrono::NaiveDate;
use layoffs_model::{EventDate, InvalidDatePolicy, RejectedRecord, StagingTable};
use tracing::warn;

use crate::error::{Result, TransformError};

/// Year fields must carry four digits; `1/5/22` would otherwise parse as year 22.
fn has_four_digit_year(value: &str, separator: char, year_last: bool) -> bool {
    let year = if year_last {
        value.rsplit(separator).next()
    } else {
        value.split(separator).next()
    };
    year.is_some_and(|y| y.len() == 4 && y.chars().all(|ch| ch.is_ascii_digit()))
}

/// Parse a source date. Returns `None` for anything that is not a real calendar date.
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.contains('/') {
        if !has_four_digit_year(trimmed, '/', true) {
            return None;
        }
        return NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").ok();
    }
    if trimmed.len() == 10 && has_four_digit_year(trimmed, '-', false) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }
    None
}

/// Outcome of date normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateNormalization {
    pub parsed: usize,
    /// Rows dropped under [`InvalidDatePolicy::Reject`].
    pub rejected: Vec<RejectedRecord>,
}

/// Parse every raw date. Missing dates stay missing.
pub fn normalize_dates(
    table: StagingTable,
    policy: InvalidDatePolicy,
) -> Result<(StagingTable, DateNormalization)> {
    let mut outcome = DateNormalization::default();
    let mut rows = Vec::with_capacity(table.len());
    for mut row in table.rows {
        if let EventDate::Raw(text) = &row.event_date {
            match parse_event_date(text) {
                Some(date) => {
                    row.event_date = EventDate::Parsed(date);
                    outcome.parsed += 1;
                }
                None => match policy {
                    InvalidDatePolicy::Fail => {
                        return Err(TransformError::DateParse {
                            line: row.source_line,
                            value: text.clone(),
                        });
                    }
                    InvalidDatePolicy::Reject => {
                        warn!(line = row.source_line, value = %text, "rejected record with unparseable date");
                        outcome.rejected.push(RejectedRecord {
                            line: row.source_line,
                            company: row.company.clone(),
                            value: text.clone(),
                            reason: "unparseable date".to_string(),
                        });
                        continue;
                    }
                },
            }
        }
        rows.push(row);
    }
    Ok((StagingTable::new(rows), outcome))
}
