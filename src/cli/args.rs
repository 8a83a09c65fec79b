//! Command line argument parsing for the sentir CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// sentir - sentiment classification for chat messages
#[derive(Parser, Debug, Clone)]
#[command(name = "sentir")]
#[command(about = "Normalize chat messages and classify their sentiment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentirArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, env = "SENTIR_CONFIG", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Language resource file (JSON), overrides the configured one
    #[arg(long, env = "SENTIR_RESOURCE", value_name = "FILE", global = true)]
    pub resource: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentirArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model on a labelled message file and save it
    Train(TrainArgs),

    /// Classify messages with a stored model
    Predict(PredictArgs),

    /// Print the normalized form of messages
    Normalize(NormalizeArgs),

    /// Show metadata of a stored model
    Inspect(InspectArgs),
}

/// Where the labels of a training file come from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct LabelArgs {
    /// Inline label list, e.g. "1,0,1,0"
    #[arg(long, value_name = "LIST")]
    pub labels: Option<String>,

    /// File containing the label list
    #[arg(long, value_name = "FILE")]
    pub labels_file: Option<PathBuf>,
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Message file, one message per line
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    #[command(flatten)]
    pub labels: LabelArgs,

    /// Where to write the model
    #[arg(short, long, env = "SENTIR_MODEL", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Fraction of rows held out for evaluation
    #[arg(long, value_name = "F")]
    pub test_fraction: Option<f64>,

    /// Seed of the train/test split
    #[arg(long)]
    pub seed: Option<u64>,

    /// Refit the saved model on every row after evaluation
    #[arg(long)]
    pub refit: bool,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Messages to classify
    #[arg(value_name = "MESSAGE", required_unless_present = "input")]
    pub messages: Vec<String>,

    /// Read messages from a file, one per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "messages")]
    pub input: Option<PathBuf>,

    /// Model to load
    #[arg(short, long, env = "SENTIR_MODEL", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Fail instead of training a model when none is stored
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Messages to normalize
    #[arg(value_name = "MESSAGE", required = true)]
    pub messages: Vec<String>,
}

/// Arguments for inspecting a model
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Model to inspect
    #[arg(short, long, env = "SENTIR_MODEL", value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
