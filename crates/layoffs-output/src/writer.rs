//! File writers.
//!
//! Both writers go through a temp file beside the target and rename it into
//! place, so an interrupted run never leaves a half-written file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use layoffs_model::{CleaningReport, LayoffRecord};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::frame::records_to_frame;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_atomic(path: &Path, write: impl FnOnce(&mut File, &Path) -> Result<()>) -> Result<()> {
    create_parent(path)?;
    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path).map_err(|source| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    let written = write(&mut file, &temp_path).and_then(|()| {
        file.sync_all().map_err(|source| OutputError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })
    });
    if let Err(err) = written {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);
    fs::rename(&temp_path, path).map_err(|source| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source,
    })
}

/// Write the cleaned table as CSV with a header row. Nulls are empty cells.
pub fn write_cleaned_csv(path: &Path, records: &[LayoffRecord]) -> Result<()> {
    let mut df = records_to_frame(records)?;
    write_atomic(path, |file, temp_path| {
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|source| OutputError::Csv {
                path: temp_path.to_path_buf(),
                source,
            })
    })?;
    info!(path = %path.display(), rows = records.len(), "wrote cleaned table");
    Ok(())
}

/// Write the cleaning report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &CleaningReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_atomic(path, |file, temp_path| {
        file.write_all(format!("{json}\n").as_bytes())
            .map_err(|source| OutputError::Io {
                operation: "write",
                path: temp_path.to_path_buf(),
                source,
            })
    })?;
    info!(path = %path.display(), "wrote cleaning report");
    Ok(())
}
