//! File-level cleaning: read, clean, write.
//!
//! Nothing is written until every step has succeeded, so a failed run leaves
//! no output behind. The source file is only ever read.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use layoffs_ingest::read_raw_table;
use layoffs_model::{IndustryCatalog, IndustryProfileEntry};
use layoffs_output::{write_cleaned_csv, write_report_json};
use layoffs_standards::{default_synonyms_path, load_industry_catalog};
use layoffs_transform::{CleaningContext, clean_records, industry_profile};

use crate::types::{CleanRequest, CleanRun};

/// `<dir>/<stem>_cleaned.csv` for an input at `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layoffs".to_string());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

/// Load the synonym table from `path`, or from the default location.
pub fn load_catalog(path: Option<&Path>) -> Result<IndustryCatalog> {
    let path = path.map_or_else(default_synonyms_path, Path::to_path_buf);
    load_industry_catalog(&path).with_context(|| format!("load synonyms {}", path.display()))
}

/// Resolve `path` through the filesystem. A file that does not exist yet
/// resolves through its parent directory.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|dir| dir.join(name))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Reject output and report paths that would clobber each other or a file
/// the run reads.
fn check_targets(request: &CleanRequest, output: &Path) -> Result<()> {
    if same_file(&request.input, output) {
        bail!(
            "output {} would overwrite the source table",
            output.display()
        );
    }
    let Some(report) = &request.report else {
        return Ok(());
    };
    if same_file(&request.input, report) {
        bail!(
            "report {} would overwrite the source table",
            report.display()
        );
    }
    if same_file(output, report) {
        bail!(
            "report {} would overwrite the cleaned output",
            report.display()
        );
    }
    if let Some(synonyms) = &request.synonyms
        && same_file(synonyms, report)
    {
        bail!(
            "report {} would overwrite the synonym table",
            report.display()
        );
    }
    Ok(())
}

pub fn clean_file(request: &CleanRequest) -> Result<CleanRun> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.input));
    check_targets(request, &output)?;

    let catalog = load_catalog(request.synonyms.as_deref())?;
    let table = read_raw_table(&request.input)
        .with_context(|| format!("read {}", request.input.display()))?;
    let ctx = CleaningContext::new(catalog).with_options(request.options.clone());
    let cleaned = clean_records(&table.rows, &ctx)
        .with_context(|| format!("clean {}", request.input.display()))?;

    if request.dry_run {
        info!(
            output_rows = cleaned.records.len(),
            "dry run, nothing written"
        );
        return Ok(CleanRun {
            input: request.input.clone(),
            output: None,
            report_path: None,
            report: cleaned.report,
        });
    }

    write_cleaned_csv(&output, &cleaned.records)
        .with_context(|| format!("write {}", output.display()))?;
    if let Some(path) = &request.report {
        write_report_json(path, &cleaned.report)
            .with_context(|| format!("write {}", path.display()))?;
    }
    info!(
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanRun {
        input: request.input.clone(),
        output: Some(output),
        report_path: request.report.clone(),
        report: cleaned.report,
    })
}

/// Distinct industry values of a source file, classified against the synonym table.
pub fn profile_file(input: &Path, synonyms: Option<&Path>) -> Result<Vec<IndustryProfileEntry>> {
    let catalog = load_catalog(synonyms)?;
    let table = read_raw_table(input).with_context(|| format!("read {}", input.display()))?;
    Ok(industry_profile(&table.rows, &catalog))
}
