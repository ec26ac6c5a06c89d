//! CLI argument definitions for the PAN validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pan-validator",
    version,
    about = "Validate and categorize PAN numbers",
    long_about = "Validate and categorize PAN numbers.\n\n\
                  Values are trimmed and upper-cased, deduplicated, then checked against\n\
                  the AAAAA9999A format and for repeated or sequential characters."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow PAN values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a delimited file of PAN numbers and write reports.
    Validate(ValidateArgs),

    /// Classify PAN values given on the command line.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Delimited input file (header row expected unless --no-header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding PAN values (default: pan_number/pan, else the first column).
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Field delimiter (single ASCII character).
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Treat the first row as data.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Output directory for reports (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Count every occurrence of a repeated value instead of once.
    #[arg(long = "per-record")]
    pub per_record: bool,

    /// Warn about raw values longer than this many characters (0 disables).
    #[arg(long = "max-raw-length", value_name = "N", default_value_t = 20)]
    pub max_raw_length: usize,

    /// Validate and print the summary without writing reports.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Which classified values to list after the summary.
    #[arg(long = "show", value_enum, default_value = "none")]
    pub show: ShowArg,

    /// Exit with status 1 when any value is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Values to classify.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

/// Classification listing filter.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowArg {
    None,
    Invalid,
    Valid,
    All,
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
