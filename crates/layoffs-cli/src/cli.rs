//! CLI argument definitions for the layoffs cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use layoffs_model::{FillPolicy, InvalidDatePolicy};

#[derive(Parser)]
#[command(
    name = "layoffs-cleaner",
    version,
    about = "Clean the layoffs dataset",
    long_about = "Clean the layoffs dataset.\n\n\
                  Removes duplicate rows, fills and normalizes industries, tidies\n\
                  country names, parses dates and drops rows with no measured outcome.\n\
                  The source file is never modified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a layoffs CSV and write the cleaned table.
    Clean(CleanArgs),

    /// List the distinct industry values of a layoffs CSV.
    Industries(IndustriesArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw layoffs CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned CSV path (default: <INPUT stem>_cleaned.csv beside the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Industry synonym table (default: $LAYOFFS_SYNONYMS_FILE or config/industry_synonyms.csv).
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// How to fill an industry when the company has several.
    #[arg(long = "fill-policy", value_enum, default_value = "smallest")]
    pub fill_policy: FillPolicyArg,

    /// What to do with a date that cannot be parsed.
    #[arg(long = "on-invalid-date", value_enum, default_value = "fail")]
    pub on_invalid_date: InvalidDateArg,

    /// Also write the cleaning report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Run every step and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct IndustriesArgs {
    /// Path to the raw layoffs CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Industry synonym table.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FillPolicyArg {
    /// Lexicographically smallest candidate.
    Smallest,
    /// First candidate in table order.
    First,
    /// Fail when a company has more than one candidate.
    Strict,
}

impl From<FillPolicyArg> for FillPolicy {
    fn from(value: FillPolicyArg) -> Self {
        match value {
            FillPolicyArg::Smallest => FillPolicy::Smallest,
            FillPolicyArg::First => FillPolicy::First,
            FillPolicyArg::Strict => FillPolicy::Strict,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InvalidDateArg {
    /// Abort the run.
    Fail,
    /// Drop the record and list it in the report.
    Reject,
}

impl From<InvalidDateArg> for InvalidDatePolicy {
    fn from(value: InvalidDateArg) -> Self {
        match value {
            InvalidDateArg::Fail => InvalidDatePolicy::Fail,
            InvalidDateArg::Reject => InvalidDatePolicy::Reject,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
