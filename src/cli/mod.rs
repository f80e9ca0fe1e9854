//! CLI argument parsing for cinerec
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CatalogArgs, CollabArgs, ContentArgs, SimilarityArgs};
pub use output::OutputFormat;

/// Cinerec - movie recommendations from genre tags and user ratings
#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress headers and non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug" or "cinerec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "CINEREC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend movies whose genres match your preferences
    Content(ContentArgs),

    /// Predict ratings for unseen movies from similar users
    Collab(CollabArgs),

    /// List the movie catalog
    Catalog(CatalogArgs),

    /// Show the user similarity matrix
    Similarity(SimilarityArgs),
}
