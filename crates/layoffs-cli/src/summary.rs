use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use layoffs_cli::types::CleanRun;

pub fn print_summary(run: &CleanRun) {
    let report = &run.report;
    println!("Input: {}", run.input.display());
    match &run.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &run.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Removed"),
        header_cell("Changed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for step in &report.steps {
        table.add_row(vec![
            Cell::new(&step.name),
            Cell::new(step.rows_before),
            Cell::new(step.rows_after),
            count_cell(step.rows_removed(), Color::Yellow),
            count_cell(step.values_changed, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.input_rows).add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
        count_cell(report.rows_removed(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let nulls = &report.retained_nulls;
    println!(
        "Retained nulls: total_laid_off={} percentage_laid_off={} funds_raised_millions={}",
        nulls.total_laid_off, nulls.percentage_laid_off, nulls.funds_raised_millions
    );

    if !report.unrecognized_industries.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Unrecognized industry"), header_cell("Rows")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (value, count) in &report.unrecognized_industries {
            table.add_row(vec![Cell::new(value), Cell::new(count)]);
        }
        println!();
        println!("{table}");
    }

    if !report.rejected.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Line"),
            header_cell("Company"),
            header_cell("Value"),
            header_cell("Reason"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for rejected in &report.rejected {
            table.add_row(vec![
                Cell::new(rejected.line),
                Cell::new(&rejected.company),
                Cell::new(&rejected.value).fg(Color::Red),
                Cell::new(&rejected.reason),
            ]);
        }
        println!();
        println!("Rejected:");
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
