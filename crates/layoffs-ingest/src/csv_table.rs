use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use layoffs_model::{Column, RawRecord};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// The raw source table. Never mutated by cleaning.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub path: PathBuf,
    /// Columns in file order.
    pub columns: Vec<Column>,
    pub rows: Vec<RawRecord>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Map header cells onto columns, failing on any missing or unexpected name.
fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(headers.len());
    let mut unexpected = Vec::new();
    for header in headers {
        match Column::from_header(header) {
            Some(column) if !columns.contains(&column) => columns.push(column),
            _ => unexpected.push(normalize_cell(header)),
        }
    }
    let missing: Vec<String> = Column::ALL
        .into_iter()
        .filter(|column| !columns.contains(column))
        .map(|column| column.name().to_string())
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(IngestError::SchemaMismatch {
            path: path.to_path_buf(),
            missing,
            unexpected,
        });
    }
    Ok(columns)
}

/// Read the raw table from any reader. `path` names the source in errors.
pub fn read_raw_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns = resolve_columns(&headers, path)?;

    let mut rows = Vec::new();
    let mut blank = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            blank += 1;
            continue;
        }
        let mut row = RawRecord {
            source_line: record.position().map_or(0, csv::Position::line),
            ..RawRecord::default()
        };
        for (column, value) in columns.iter().zip(record.iter()) {
            *row.value_mut(*column) = normalize_cell(value);
        }
        rows.push(row);
    }
    if blank > 0 {
        debug!(path = %path.display(), blank_rows = blank, "skipped blank rows");
    }
    info!(path = %path.display(), row_count = rows.len(), "read source table");
    Ok(RawTable {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

/// Read the raw layoffs CSV at `path`.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_raw_table_from_reader(file, path)
}
