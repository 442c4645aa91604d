//! Copy raw rows into the typed working table.

use layoffs_model::{
    Column, EventDate, RawRecord, StagingRecord, StagingTable, is_null_token, parse_f64,
    parse_i64,
};

use crate::error::{Result, TransformError};

fn text(row: &RawRecord, column: Column) -> Option<String> {
    let value = row.value(column);
    if is_null_token(value) || (value.is_empty() && column.empty_is_null()) {
        None
    } else {
        Some(value.to_string())
    }
}

fn number<T>(row: &RawRecord, column: Column, parse: fn(&str) -> Option<T>) -> Result<Option<T>> {
    let value = row.value(column).trim();
    if value.is_empty() || is_null_token(value) {
        return Ok(None);
    }
    parse(value)
        .map(Some)
        .ok_or_else(|| TransformError::InvalidNumber {
            line: row.source_line,
            column,
            value: value.to_string(),
        })
}

fn stage_row(row: &RawRecord) -> Result<StagingRecord> {
    let company = text(row, Column::Company)
        .filter(|c| !c.is_empty())
        .ok_or(TransformError::MissingCompany {
            line: row.source_line,
        })?;
    let event_date = match text(row, Column::Date) {
        Some(value) => EventDate::Raw(value),
        None => EventDate::Missing,
    };
    Ok(StagingRecord {
        source_line: row.source_line,
        row_num: None,
        company,
        location: text(row, Column::Location),
        industry: text(row, Column::Industry),
        total_laid_off: number(row, Column::TotalLaidOff, parse_i64)?,
        percentage_laid_off: number(row, Column::PercentageLaidOff, parse_f64)?,
        event_date,
        stage: text(row, Column::Stage),
        country: text(row, Column::Country),
        funds_raised_millions: number(row, Column::FundsRaisedMillions, parse_f64)?,
    })
}

/// Build the working copy. The raw rows are only borrowed.
///
/// `NULL` reads as null in every column. Empty cells read as null except in
/// `industry`, where the fill step handles them.
pub fn snapshot(rows: &[RawRecord]) -> Result<StagingTable> {
    rows.iter().map(stage_row).collect()
}
