//! `cinerec collab` command - predict ratings from similar users
//!
//! - `--rate ITEM=RATING` records ratings for the target before predicting
//! - `--neighbors` and `--top` override the `[collaborative]` config section
//! - Only items the target has not rated are predicted

use serde_json::json;

use crate::cli::{Cli, CollabArgs, OutputFormat};
use crate::commands::data::load_ratings;
use crate::commands::render::{
    format_predicted_rating, format_similarity, print_banner, print_json,
};
use cinerec_core::config::EngineConfig;
use cinerec_core::error::Result;
use cinerec_core::recommendation::positive_count;

/// Execute the collab command
pub fn execute(cli: &Cli, config: &EngineConfig, args: &CollabArgs) -> Result<()> {
    let mut settings = config.collaborative.clone();
    if let Some(k) = args.neighbors {
        settings.k_neighbors = positive_count("k_neighbors", k)?;
    }
    if let Some(top) = args.top {
        settings.top_n = positive_count("top_n", top)?;
    }
    let recommender = settings.recommender()?;

    let matrix = load_ratings(&args.ratings, &args.user)?;
    let neighbors = recommender.neighbors(&matrix, &args.user)?;
    let results = recommender.recommend(&matrix, &args.user)?;

    match cli.format {
        OutputFormat::Json => {
            let recommendations: Vec<_> = results
                .iter()
                .enumerate()
                .map(|(idx, rec)| {
                    json!({
                        "rank": idx + 1,
                        "id": rec.id,
                        "predicted_rating": rec.score,
                    })
                })
                .collect();
            print_json(&json!({
                "user": args.user,
                "neighbors": neighbors,
                "recommendations": recommendations,
            }))?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                print_banner("TOP MOVIE RECOMMENDATIONS (Collaborative Filtering)");
                if cli.verbose {
                    for neighbor in &neighbors {
                        println!(
                            "Neighbor: {} (similarity {})",
                            neighbor.user,
                            format_similarity(neighbor.similarity)
                        );
                    }
                    println!();
                }
            }
            if results.is_empty() && !cli.quiet {
                println!("No predictions for {}: rate a few movies with --rate.", args.user);
            }
            for (idx, rec) in results.iter().enumerate() {
                println!("{}. {}", idx + 1, rec.id);
                println!("   Predicted Rating: {}", format_predicted_rating(rec.score));
                if !cli.quiet {
                    println!();
                }
            }
        }
    }

    Ok(())
}
