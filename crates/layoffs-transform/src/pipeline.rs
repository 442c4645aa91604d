//! Ordered step execution.
//!
//! Each step implements [`ProcessingStep`], takes the staging table by value
//! and returns the transformed table. The executor records row counts for
//! every step into the [`CleaningReport`] carried by [`PipelineState`].
//!
//! # Standard Pipeline Order
//!
//! 1. **deduplicate**
//! 2. **fill_industry**
//! 3. **normalize_industry**
//! 4. **normalize_country**
//! 5. **normalize_dates**
//! 6. **audit_nulls**
//! 7. **prune_uninformative**
//! 8. **settle_duplicates**
//! 9. **drop_rank**
//!
//! The snapshot runs before the pipeline, in [`clean_records`], because it
//! works on raw rows rather than on the staging table.

use std::time::Instant;

use layoffs_model::{CleaningReport, LayoffRecord, RawRecord, StagingTable, StepReport};
use tracing::{debug, info, info_span, warn};

use crate::context::CleaningContext;
use crate::dedupe::{deduplicate, drop_rank};
use crate::error::Result;
use crate::fill::fill_missing_industries;
use crate::normalization::{normalize_countries, normalize_dates, normalize_industries};
use crate::prune::{audit_nulls, prune_uninformative};
use crate::snapshot::snapshot;

/// A single step of the cleaning pipeline.
pub trait ProcessingStep: Send + Sync {
    /// Transform the table.
    ///
    /// Steps that rewrite cells in place report how many through
    /// [`PipelineState::values_changed`].
    fn apply(
        &self,
        table: StagingTable,
        ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable>;

    /// Name used in logs and in the report.
    fn step_name(&self) -> &str;
}

/// Mutable state shared across pipeline steps.
#[derive(Debug, Default)]
pub struct PipelineState {
    /// Report under construction.
    pub report: CleaningReport,
    /// Cells rewritten by the step currently running; reset before each step.
    pub values_changed: usize,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An ordered pipeline of cleaning steps.
pub struct CleaningPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl CleaningPipeline {
    fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run all steps in order.
    pub fn execute(
        &self,
        table: StagingTable,
        ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let mut table = table;
        for step in &self.steps {
            let name = step.step_name();
            let span = info_span!("step", step = name);
            let _guard = span.enter();
            let start = Instant::now();
            let rows_before = table.len();
            state.values_changed = 0;
            table = step.apply(table, ctx, state)?;
            let report = StepReport {
                name: name.to_string(),
                rows_before,
                rows_after: table.len(),
                values_changed: state.values_changed,
            };
            debug!(
                rows_before = report.rows_before,
                rows_after = report.rows_after,
                values_changed = report.values_changed,
                duration_ms = start.elapsed().as_millis(),
                "step complete"
            );
            state.report.steps.push(report);
        }
        Ok(table)
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

// ============================================================================
// Standard Cleaning Steps
// ============================================================================

/// Step 1: rank rows within identical partitions, keep rank 1.
pub struct DeduplicateStep;

impl ProcessingStep for DeduplicateStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        _state: &mut PipelineState,
    ) -> Result<StagingTable> {
        Ok(deduplicate(table))
    }

    fn step_name(&self) -> &str {
        "deduplicate"
    }
}

/// Step 2: fill null industries from rows of the same company.
pub struct FillIndustryStep;

impl ProcessingStep for FillIndustryStep {
    fn apply(
        &self,
        table: StagingTable,
        ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let (table, changed) = fill_missing_industries(table, ctx.options.fill_policy)?;
        state.values_changed = changed;
        Ok(table)
    }

    fn step_name(&self) -> &str {
        "fill_industry"
    }
}

/// Step 3: collapse industry synonyms.
pub struct NormalizeIndustryStep;

impl ProcessingStep for NormalizeIndustryStep {
    fn apply(
        &self,
        table: StagingTable,
        ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let (table, outcome) = normalize_industries(table, &ctx.catalog);
        for (value, count) in &outcome.unrecognized {
            warn!(industry = %value, count, "industry not in synonym table");
        }
        state.values_changed = outcome.rewritten;
        state.report.unrecognized_industries = outcome.unrecognized;
        Ok(table)
    }

    fn step_name(&self) -> &str {
        "normalize_industry"
    }
}

/// Step 4: strip trailing periods from country names.
pub struct NormalizeCountryStep;

impl ProcessingStep for NormalizeCountryStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let (table, changed) = normalize_countries(table);
        state.values_changed = changed;
        Ok(table)
    }

    fn step_name(&self) -> &str {
        "normalize_country"
    }
}

/// Step 5: parse event dates.
pub struct NormalizeDatesStep;

impl ProcessingStep for NormalizeDatesStep {
    fn apply(
        &self,
        table: StagingTable,
        ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let (table, outcome) = normalize_dates(table, ctx.options.invalid_dates)?;
        state.values_changed = outcome.parsed;
        state.report.rejected.extend(outcome.rejected);
        Ok(table)
    }

    fn step_name(&self) -> &str {
        "normalize_dates"
    }
}

/// Step 6: count retained nulls. Changes nothing.
pub struct AuditNullsStep;

impl ProcessingStep for AuditNullsStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        state: &mut PipelineState,
    ) -> Result<StagingTable> {
        let audit = audit_nulls(&table);
        info!(
            total_laid_off = audit.total_laid_off,
            percentage_laid_off = audit.percentage_laid_off,
            funds_raised_millions = audit.funds_raised_millions,
            both_measures = audit.both_measures,
            "retained nulls"
        );
        state.report.retained_nulls = audit;
        Ok(table)
    }

    fn step_name(&self) -> &str {
        "audit_nulls"
    }
}

/// Step 7: drop rows with neither measure.
pub struct PruneUninformativeStep;

impl ProcessingStep for PruneUninformativeStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        _state: &mut PipelineState,
    ) -> Result<StagingTable> {
        Ok(prune_uninformative(table))
    }

    fn step_name(&self) -> &str {
        "prune_uninformative"
    }
}

/// Step 8: rows that only became identical after normalization collapse here.
pub struct SettleDuplicatesStep;

impl ProcessingStep for SettleDuplicatesStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        _state: &mut PipelineState,
    ) -> Result<StagingTable> {
        Ok(deduplicate(table))
    }

    fn step_name(&self) -> &str {
        "settle_duplicates"
    }
}

/// Step 9: clear the helper rank.
pub struct DropRankStep;

impl ProcessingStep for DropRankStep {
    fn apply(
        &self,
        table: StagingTable,
        _ctx: &CleaningContext,
        _state: &mut PipelineState,
    ) -> Result<StagingTable> {
        Ok(drop_rank(table))
    }

    fn step_name(&self) -> &str {
        "drop_rank"
    }
}

/// Build the fixed cleaning pipeline.
pub fn build_default_pipeline() -> CleaningPipeline {
    CleaningPipeline::empty()
        .add_step(Box::new(DeduplicateStep))
        .add_step(Box::new(FillIndustryStep))
        .add_step(Box::new(NormalizeIndustryStep))
        .add_step(Box::new(NormalizeCountryStep))
        .add_step(Box::new(NormalizeDatesStep))
        .add_step(Box::new(AuditNullsStep))
        .add_step(Box::new(PruneUninformativeStep))
        .add_step(Box::new(SettleDuplicatesStep))
        .add_step(Box::new(DropRankStep))
}

/// Cleaned rows plus what happened to them.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutput {
    pub records: Vec<LayoffRecord>,
    pub report: CleaningReport,
}

/// Run the snapshot and the full pipeline over in-memory raw rows.
///
/// The raw rows are only borrowed and are never modified.
pub fn clean_records(rows: &[RawRecord], ctx: &CleaningContext) -> Result<CleanOutput> {
    let start = Instant::now();
    let table = info_span!("step", step = "snapshot").in_scope(|| snapshot(rows))?;

    let mut state = PipelineState::new();
    state.report.input_rows = rows.len();
    state.report.steps.push(StepReport {
        name: "snapshot".to_string(),
        rows_before: rows.len(),
        rows_after: table.len(),
        values_changed: 0,
    });

    let table = build_default_pipeline().execute(table, ctx, &mut state)?;
    let records = table.into_records()?;

    let mut report = state.report;
    report.output_rows = records.len();
    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        rejected = report.rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    Ok(CleanOutput { records, report })
}
