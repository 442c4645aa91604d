//! Cleaned records as a Polars frame.

use layoffs_model::{Column as Field, LayoffRecord, format_numeric};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::{OutputError, Result};

fn text_column(field: Field, values: Vec<Option<String>>) -> Column {
    Series::new(field.name().into(), values).into_column()
}

fn text_values(
    records: &[LayoffRecord],
    get: impl Fn(&LayoffRecord) -> Option<&str>,
) -> Vec<Option<String>> {
    records.iter().map(|r| get(r).map(str::to_string)).collect()
}

fn decimal_values(
    records: &[LayoffRecord],
    get: impl Fn(&LayoffRecord) -> Option<f64>,
) -> Vec<Option<String>> {
    records.iter().map(|r| get(r).map(format_numeric)).collect()
}

/// Build the output frame, one column per business attribute in source order.
///
/// Fractional measures keep the source spelling (`5`, `0.25`) and dates are
/// written as `YYYY-MM-DD`.
pub fn records_to_frame(records: &[LayoffRecord]) -> Result<DataFrame> {
    let totals: Vec<Option<i64>> = records.iter().map(|r| r.total_laid_off).collect();
    let dates: Vec<Option<String>> = records
        .iter()
        .map(|r| r.event_date.map(|d| d.format("%Y-%m-%d").to_string()))
        .collect();

    let columns = vec![
        text_column(
            Field::Company,
            text_values(records, |r| Some(r.company.as_str())),
        ),
        text_column(
            Field::Location,
            text_values(records, |r| r.location.as_deref()),
        ),
        text_column(
            Field::Industry,
            text_values(records, |r| r.industry.as_deref()),
        ),
        Series::new(Field::TotalLaidOff.name().into(), totals).into_column(),
        text_column(
            Field::PercentageLaidOff,
            decimal_values(records, |r| r.percentage_laid_off),
        ),
        text_column(Field::Date, dates),
        text_column(Field::Stage, text_values(records, |r| r.stage.as_deref())),
        text_column(
            Field::Country,
            text_values(records, |r| r.country.as_deref()),
        ),
        text_column(
            Field::FundsRaisedMillions,
            decimal_values(records, |r| r.funds_raised_millions),
        ),
    ];
    DataFrame::new(columns).map_err(OutputError::Frame)
}
