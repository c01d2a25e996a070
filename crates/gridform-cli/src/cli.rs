//! CLI argument definitions for the gridform tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gridform",
    version,
    about = "Gridform - reshape spreadsheet tables between wide and long form",
    long_about = "Reshape delimited-text tables between the wide encoding (one\n\
                  column per capability or teacher attribute) and the long\n\
                  encoding (one row per attribute instance), then export the\n\
                  result as spreadsheet-ready CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Apply one reshape operation to a CSV table and export the result.
    Apply(ApplyArgs),

    /// Preview a CSV table without changing it.
    Show(ShowArgs),

    /// List the supported reshape operations.
    Ops,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Reshape operation to apply.
    #[arg(long = "op", value_enum)]
    pub op: OpArg,

    /// Output path (default: <INPUT stem>-<op>.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a preview of the result table after writing it.
    #[arg(long = "preview")]
    pub preview: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the CSV file to preview.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Maximum number of rows to display.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

/// CLI reshape operation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OpArg {
    /// Wide capability matrix to long form.
    Expand,
    /// Long form back to the wide capability matrix.
    Collapse,
    /// Teacher lists to one row per teacher name.
    FlattenNames,
    /// Teacher lists to one row per teacher code and name.
    FlattenCodes,
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
