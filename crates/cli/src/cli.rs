//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shapemill - Typed data transformation pipeline
#[derive(Parser, Debug)]
#[command(
    name = "shapemill",
    author,
    version,
    about = "Typed data transformation pipeline",
    long_about = "A shape-aware data processing pipeline.\n\n\
                  Classifies inputs as text, sequences or mappings, applies the \n\
                  requested transformation, and records every call in an append-only \n\
                  history with aggregate statistics."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "SHAPEMILL_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "SHAPEMILL_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every step of a job plan
    Run(RunArgs),

    /// Validate a job plan without running it
    Validate(ValidateArgs),

    /// Display job plan information
    Info(InfoArgs),

    /// Process a single value through one operation
    Process(ProcessArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to job plan file (TOML or JSON)
    #[arg(short, long, default_value = "plan.toml", env = "SHAPEMILL_PLAN")]
    pub plan: PathBuf,

    /// Abort the run on the first failed step
    #[arg(long, env = "SHAPEMILL_FAIL_FAST")]
    pub fail_fast: bool,

    /// Output the full result history as JSON when the run finishes
    #[arg(long)]
    pub json: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "SHAPEMILL_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to job plan file to validate
    #[arg(short, long, default_value = "plan.toml")]
    pub plan: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to job plan file
    #[arg(short, long, default_value = "plan.toml")]
    pub plan: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show detailed step information
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the `process` command
#[derive(Parser, Debug)]
pub struct ProcessArgs {
    /// Process an inline text value
    #[arg(long)]
    pub text: Option<String>,

    /// Process an inline JSON value
    #[arg(long, conflicts_with = "text")]
    pub json_input: Option<String>,

    /// Process a file (.json or .csv by extension)
    #[arg(long, conflicts_with_all = ["text", "json_input"])]
    pub file: Option<PathBuf>,

    /// Operation to apply
    #[arg(short, long, default_value = "transform")]
    pub operation: String,

    /// Output the result record as JSON
    #[arg(long)]
    pub json: bool,

    /// Print processing statistics after the result
    #[arg(long)]
    pub stats: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
