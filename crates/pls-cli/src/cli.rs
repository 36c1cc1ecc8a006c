//! CLI argument definitions for the PLS auto-scorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pls-cli",
    version,
    about = "PLS Auto-Scorer - Convert raw PLS scores to importable normed records",
    long_about = "Convert raw Preschool Language Scale subtest scores to normed records.\n\n\
                  Looks up standard scores, percentile ranks, age equivalents, and growth\n\
                  scale values in age-banded reference tables and writes a dated CSV\n\
                  shaped for clinical data repository import."
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
    /// Score a batch of subjects and write the importable file.
    Score(ScoreArgs),

    /// List the supported age bands.
    Bands,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Input file with raw scores (.csv comma-separated, .tsv/.txt tab-separated).
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Directory holding the reference tables.
    #[arg(long = "ref-dir", value_name = "DIR")]
    pub ref_dir: PathBuf,

    /// Output directory for the importable file (default: the input file's parent).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file overriding the input column names.
    #[arg(long = "bindings", value_name = "JSON")]
    pub bindings: Option<PathBuf>,

    /// Score and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
