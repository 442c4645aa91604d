use anyhow::Result;
use comfy_table::{Cell, Table};

use layoffs_cli::pipeline::{clean_file, profile_file};
use layoffs_cli::types::{CleanRequest, CleanRun};
use layoffs_model::{CleaningOptions, IndustryClass};

use crate::cli::{CleanArgs, IndustriesArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_clean(args: &CleanArgs) -> Result<CleanRun> {
    let mut request = CleanRequest::new(&args.input);
    request.output.clone_from(&args.output);
    request.synonyms.clone_from(&args.synonyms);
    request.report.clone_from(&args.report);
    request.options = CleaningOptions::new()
        .with_fill_policy(args.fill_policy.into())
        .with_invalid_dates(args.on_invalid_date.into());
    request.dry_run = args.dry_run;
    clean_file(&request)
}

pub fn run_industries(args: &IndustriesArgs) -> Result<()> {
    let profile = profile_file(&args.input, args.synonyms.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Industry"),
        header_cell("Rows"),
        header_cell("Status"),
        header_cell("Canonical"),
    ]);
    apply_table_style(&mut table);
    for entry in profile {
        let value = match entry.value {
            Some(value) => Cell::new(value),
            None => dim_cell("(null)"),
        };
        let status = match entry.class {
            Some(IndustryClass::Canonical) => Cell::new("canonical"),
            Some(IndustryClass::Variant) => Cell::new("variant"),
            Some(IndustryClass::Unrecognized) => Cell::new("unrecognized"),
            None => dim_cell("-"),
        };
        let canonical = match entry.canonical {
            Some(canonical) => Cell::new(canonical),
            None => dim_cell("-"),
        };
        table.add_row(vec![value, Cell::new(entry.count), status, canonical]);
    }
    println!("{table}");
    Ok(())
}
