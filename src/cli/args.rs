//! Command line argument parsing for the Plume CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default location of the history file.
pub const DEFAULT_HISTORY_FILE: &str = "plume_history.json";

/// Plume - content-quality signals for social-media posts
#[derive(Parser, Debug, Clone)]
#[command(name = "plume")]
#[command(about = "Sentiment, readability, hashtags and engagement feedback for post drafts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PlumeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PLUME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PlumeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze one or more texts
    Analyze(AnalyzeArgs),

    /// Manage saved analyses
    #[command(subcommand)]
    History(HistoryCommand),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text files to analyze; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Number of hashtag candidates (overrides the config)
    #[arg(long, value_name = "N")]
    pub hashtags: Option<usize>,

    /// Always quote this call-to-action example instead of a random one
    #[arg(long, value_name = "INDEX")]
    pub seed_cta: Option<usize>,

    /// Save each analysis to the history
    #[arg(long)]
    pub save: bool,

    /// History file used with --save
    #[arg(long, value_name = "HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List saved analyses, newest first
    List(HistoryFileArgs),

    /// Show one saved analysis, re-analyzing its text
    Show(HistoryEntryArgs),

    /// Delete one saved analysis
    Delete(HistoryEntryArgs),

    /// Delete every saved analysis
    Clear(HistoryFileArgs),
}

/// Arguments naming the history file
#[derive(Parser, Debug, Clone)]
pub struct HistoryFileArgs {
    /// History file
    #[arg(long, value_name = "HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,
}

/// Arguments naming one history entry
#[derive(Parser, Debug, Clone)]
pub struct HistoryEntryArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,

    /// History file
    #[arg(long, value_name = "HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
