use clap::Args;
use std::path::PathBuf;

use super::parse::{parse_rating_assignment, RatingAssignment};

/// Arguments for `cinerec content`
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Preferred genres, comma- or space-separated (e.g. "Action, Sci-Fi")
    pub preferences: String,

    /// Number of recommendations (default from config, 5)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Catalog file (.json or .toml); defaults to the built-in movie catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Keep common English words when matching
    #[arg(long)]
    pub no_stop_words: bool,

    /// Print the fitted vocabulary and matrix shape
    #[arg(long)]
    pub show_vocabulary: bool,
}

/// Ratings source shared by the collaborative commands
#[derive(Args, Debug)]
pub struct RatingsArgs {
    /// Ratings file (.json or .toml); defaults to the built-in sample ratings
    #[arg(long)]
    pub ratings: Option<PathBuf>,

    /// Record a rating for the target user before computing (ITEM=RATING, 0-5)
    #[arg(long, value_parser = parse_rating_assignment, action = clap::ArgAction::Append)]
    pub rate: Vec<RatingAssignment>,
}

/// Arguments for `cinerec collab`
#[derive(Args, Debug)]
pub struct CollabArgs {
    /// Target user
    #[arg(long, short, default_value = cinerec_core::sample::CURRENT_USER)]
    pub user: String,

    #[command(flatten)]
    pub ratings: RatingsArgs,

    /// Number of similar users consulted (default from config, 3)
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub neighbors: Option<i64>,

    /// Number of recommendations (default from config, 3)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub top: Option<i64>,
}

/// Arguments for `cinerec catalog`
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (.json or .toml); defaults to the built-in movie catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for `cinerec similarity`
#[derive(Args, Debug)]
pub struct SimilarityArgs {
    /// Only show this user's row; also the target of --rate
    #[arg(long, short)]
    pub user: Option<String>,

    #[command(flatten)]
    pub ratings: RatingsArgs,
}
