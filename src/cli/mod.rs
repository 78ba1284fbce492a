//! CLI argument parsing for evalio
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use evalio_core::format::OutputFormat;
use evalio_core::EvaluationMode;
use parse::{parse_format, parse_mode};

/// Evalio - rubric, similarity and hybrid scoring for free-text answers
#[derive(Parser, Debug)]
#[command(name = "evalio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `evalio_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ~/.config/evalio/config.toml if present)
    #[arg(long, global = true, env = "EVALIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an answer described by a JSON request
    Evaluate(EvaluateArgs),

    /// Run the built-in photosynthesis example
    Demo(ModeArgs),
}

/// Scoring mode and weight overrides shared by commands
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Scoring mode: rubric, similarity, or hybrid (defaults to config)
    #[arg(long, short, value_parser = parse_mode)]
    pub mode: Option<EvaluationMode>,

    /// Rubric weight for hybrid mode (requires --similarity-weight)
    #[arg(long, requires = "similarity_weight")]
    pub rubric_weight: Option<f64>,

    /// Similarity weight for hybrid mode (requires --rubric-weight)
    #[arg(long, requires = "rubric_weight")]
    pub similarity_weight: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// JSON request file, or `-` for stdin
    #[arg(long, short, default_value = "-")]
    pub input: String,

    #[command(flatten)]
    pub mode: ModeArgs,
}
