//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use riskprep_encode::ReductionPolicy;

#[derive(Parser)]
#[command(
    name = "riskprep",
    version,
    about = "Encode Korean range-bucketed survey columns to numeric values",
    long_about = "Prepare risk-survey tables for modeling.\n\n\
                  Converts bucketed range descriptions such as '3개초과 5개이하'\n\
                  into single numeric codes, keeps the fitted mapping for reuse,\n\
                  and decodes numeric tables back to the original strings."
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
    /// Fit a codec on a CSV file and write the encoded table.
    Encode(EncodeArgs),

    /// Decode an encoded CSV back to strings using a saved mapping.
    Decode(DecodeArgs),

    /// Fit only and print the per-column mappings without writing a table.
    Mappings(MappingsArgs),
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Reduction policy for bounded ranges.
    #[arg(long = "policy", value_enum, default_value = "middle")]
    pub policy: PolicyArg,

    /// Columns to encode (default: every textual column).
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Replace missing encodings with this value instead of leaving nulls.
    #[arg(long = "sentinel", value_name = "VALUE")]
    pub sentinel: Option<f64>,

    /// Output CSV path (default: <INPUT>.encoded.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Save the fitted mapping as JSON for later decoding.
    #[arg(long = "mapping-out", value_name = "PATH")]
    pub mapping_out: Option<PathBuf>,

    /// Use the ordinal label codec instead of the range codec.
    #[arg(
        long = "label",
        conflicts_with_all = ["policy", "sentinel", "mapping_out"]
    )]
    pub label: bool,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Encoded CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Mapping JSON produced by `encode --mapping-out`.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Output CSV path (default: <INPUT>.decoded.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Reduction policy for bounded ranges.
    #[arg(long = "policy", value_enum, default_value = "middle")]
    pub policy: PolicyArg,

    /// Columns to fit (default: every textual column).
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

/// CLI reduction policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Middle,
    Mean,
}

impl From<PolicyArg> for ReductionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Middle => ReductionPolicy::Middle,
            PolicyArg::Mean => ReductionPolicy::Mean,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
