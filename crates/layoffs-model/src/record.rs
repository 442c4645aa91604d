//! Layoff records at each stage of cleaning.
//!
//! A [`RawRecord`] holds the source text exactly as read. The snapshot step
//! turns it into a [`StagingRecord`], which carries the transient rank
//! (`row_num`) and the source line. Only after every step has run does a
//! staging row become a [`LayoffRecord`], which has neither.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::columns::Column;
use crate::error::{ModelError, Result};
use crate::numeric::format_numeric;

/// Returns true for the literal `NULL` token the source export uses for missing values.
pub fn is_null_token(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("NULL")
}

/// One row of the source table, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Line in the source file (1-based, header is line 1).
    pub source_line: u64,
    pub company: String,
    pub location: String,
    pub industry: String,
    pub total_laid_off: String,
    pub percentage_laid_off: String,
    pub date: String,
    pub stage: String,
    pub country: String,
    pub funds_raised_millions: String,
}

impl RawRecord {
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Company => &self.company,
            Column::Location => &self.location,
            Column::Industry => &self.industry,
            Column::TotalLaidOff => &self.total_laid_off,
            Column::PercentageLaidOff => &self.percentage_laid_off,
            Column::Date => &self.date,
            Column::Stage => &self.stage,
            Column::Country => &self.country,
            Column::FundsRaisedMillions => &self.funds_raised_millions,
        }
    }

    pub fn value_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Company => &mut self.company,
            Column::Location => &mut self.location,
            Column::Industry => &mut self.industry,
            Column::TotalLaidOff => &mut self.total_laid_off,
            Column::PercentageLaidOff => &mut self.percentage_laid_off,
            Column::Date => &mut self.date,
            Column::Stage => &mut self.stage,
            Column::Country => &mut self.country,
            Column::FundsRaisedMillions => &mut self.funds_raised_millions,
        }
    }
}

/// Event date while the record is being cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum EventDate {
    Missing,
    /// Source text not yet parsed.
    Raw(String),
    Parsed(NaiveDate),
}

impl EventDate {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            EventDate::Parsed(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, EventDate::Raw(_))
    }

    /// Text used when comparing rows for duplicates.
    pub fn key_text(&self) -> String {
        match self {
            EventDate::Missing => String::new(),
            EventDate::Raw(text) => text.clone(),
            EventDate::Parsed(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A row of the working copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagingRecord {
    pub source_line: u64,
    /// Rank within the duplicate partition; set by deduplication, cleared at the end.
    pub row_num: Option<u32>,
    pub company: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub total_laid_off: Option<i64>,
    pub percentage_laid_off: Option<f64>,
    pub event_date: EventDate,
    pub stage: Option<String>,
    pub country: Option<String>,
    pub funds_raised_millions: Option<f64>,
}

impl StagingRecord {
    /// Values of all nine business attributes, used as the duplicate partition key.
    ///
    /// Nulls are distinguished from empty strings so that `NULL` and `""`
    /// industries only collide once the fill step has unified them.
    pub fn partition_key(&self) -> Vec<Option<String>> {
        vec![
            Some(self.company.clone()),
            self.location.clone(),
            self.industry.clone(),
            self.total_laid_off.map(|v| v.to_string()),
            self.percentage_laid_off.map(format_numeric),
            match &self.event_date {
                EventDate::Missing => None,
                other => Some(other.key_text()),
            },
            self.stage.clone(),
            self.country.clone(),
            self.funds_raised_millions.map(format_numeric),
        ]
    }

    /// True when neither measured outcome is present.
    pub fn is_uninformative(&self) -> bool {
        self.total_laid_off.is_none() && self.percentage_laid_off.is_none()
    }

    /// Convert into the final schema, dropping the rank and provenance.
    pub fn into_layoff_record(self) -> Result<LayoffRecord> {
        let event_date = match self.event_date {
            EventDate::Missing => None,
            EventDate::Parsed(date) => Some(date),
            EventDate::Raw(value) => {
                return Err(ModelError::UnparsedDate {
                    line: self.source_line,
                    value,
                });
            }
        };
        Ok(LayoffRecord {
            company: self.company,
            location: self.location,
            industry: self.industry,
            total_laid_off: self.total_laid_off,
            percentage_laid_off: self.percentage_laid_off,
            event_date,
            stage: self.stage,
            country: self.country,
            funds_raised_millions: self.funds_raised_millions,
        })
    }
}

/// A cleaned layoff record. This is the output schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoffRecord {
    pub company: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub total_laid_off: Option<i64>,
    pub percentage_laid_off: Option<f64>,
    pub event_date: Option<NaiveDate>,
    pub stage: Option<String>,
    pub country: Option<String>,
    pub funds_raised_millions: Option<f64>,
}

impl LayoffRecord {
    /// Render back into source text, the way the cleaned CSV spells it.
    ///
    /// Nulls become empty cells and dates use `YYYY-MM-DD`.
    pub fn to_raw(&self, source_line: u64) -> RawRecord {
        RawRecord {
            source_line,
            company: self.company.clone(),
            location: self.location.clone().unwrap_or_default(),
            industry: self.industry.clone().unwrap_or_default(),
            total_laid_off: self
                .total_laid_off
                .map(|v| v.to_string())
                .unwrap_or_default(),
            percentage_laid_off: self
                .percentage_laid_off
                .map(format_numeric)
                .unwrap_or_default(),
            date: self
                .event_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            stage: self.stage.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            funds_raised_millions: self
                .funds_raised_millions
                .map(format_numeric)
                .unwrap_or_default(),
        }
    }
}
