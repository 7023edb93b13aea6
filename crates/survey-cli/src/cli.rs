//! CLI argument definitions for the survey label translator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-labels",
    version,
    about = "Survey label translator - Replace coded answers with their labels",
    long_about = "Replace numeric survey codes with their human-readable labels.\n\n\
                  Reads a CSV export, translates every column that belongs to the\n\
                  questionnaire codebook and leaves all other columns untouched."
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
    /// Translate the coded columns of a CSV export.
    Translate(TranslateArgs),

    /// List the survey variables and their question text.
    Variables {
        /// Print the listing as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the code → label table of one variable.
    Codes {
        /// Variable identifier, e.g. D01.
        #[arg(value_name = "VARIABLE")]
        variable: String,
    },

    /// Check the built-in codebook for consistency.
    Check,
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// CSV export with one column per survey variable.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_translated.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace coded column names with their question text.
    #[arg(long = "question-headers")]
    pub question_headers: bool,
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
