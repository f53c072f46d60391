//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "auto-insight",
    version,
    about = "Automatic insight discovery for tabular data",
    long_about = "Profile a CSV dataset, classify its columns and test every typed column pair.\n\n\
                  Significant relationships are phrased as short natural-language findings\n\
                  and can be written to a CSV or JSON table."
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
    /// Discover insights in a CSV file.
    Analyze(AnalyzeArgs),

    /// Show column profiles and semantic tags without testing pairs.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write records to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (default: inferred from the output extension, else csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormatArg>,

    /// Append to an existing report instead of replacing it.
    #[arg(long = "append")]
    pub append: bool,

    /// Identifier written to every record's dataset column.
    #[arg(long = "dataset-id", value_name = "ID")]
    pub dataset_id: Option<String>,

    /// Run date written to every record (default: today, mm-dd-yy).
    #[arg(long = "run-date", value_name = "DATE")]
    pub run_date: Option<String>,

    /// Significance level; a pair is significant when p <= siglvl.
    #[arg(long = "siglvl", default_value_t = 0.05)]
    pub siglvl: f64,

    /// Only emit records for significant pairs.
    #[arg(long = "only-significant")]
    pub only_significant: bool,

    #[command(flatten)]
    pub classify: ClassifyArgs,

    /// Maximum number of insight rows printed in the summary.
    #[arg(long = "top", default_value_t = 20)]
    pub top: usize,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    #[command(flatten)]
    pub classify: ClassifyArgs,
}

/// Flags shared by every command that classifies columns.
#[derive(Parser)]
pub struct ClassifyArgs {
    /// Treat low-cardinality integer columns as categorical or binary.
    #[arg(long = "categorical-as-ints")]
    pub categorical_as_ints: bool,

    /// Minimum group size for binary and categorical columns.
    #[arg(long = "min-samples", default_value_t = 30)]
    pub min_samples: usize,

    /// |r| at or above which a numeric column is dropped as a near-duplicate.
    #[arg(long = "correlation-threshold", default_value_t = 0.9)]
    pub correlation_threshold: f64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
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
