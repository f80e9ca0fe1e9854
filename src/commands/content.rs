//! `cinerec content` command - rank movies by genre similarity
//!
//! - Preferences are free text; commas, dashes and case are insignificant
//! - `--top` overrides `[content] top_n` from the config
//! - Ties keep catalog order
//! - `--show-vocabulary` prints the fitted feature names before the results

use serde_json::json;

use crate::cli::{Cli, ContentArgs, OutputFormat};
use crate::commands::data::load_catalog;
use crate::commands::render::{format_similarity, print_banner, print_json};
use cinerec_core::config::EngineConfig;
use cinerec_core::error::Result;
use cinerec_core::recommendation::positive_count;

/// Execute the content command
pub fn execute(cli: &Cli, config: &EngineConfig, args: &ContentArgs) -> Result<()> {
    let mut settings = config.content.clone();
    if let Some(top) = args.top {
        settings.top_n = positive_count("top_n", top)?;
    }
    if args.no_stop_words {
        settings.stop_words = false;
    }

    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut recommender = settings.recommender();
    let results = recommender.recommend(&catalog, &args.preferences, settings.top_n)?;
    let vocabulary: Vec<&str> = recommender
        .state()
        .map(|state| state.vocabulary().collect())
        .unwrap_or_default();

    match cli.format {
        OutputFormat::Json => {
            let recommendations: Vec<_> = results
                .iter()
                .enumerate()
                .map(|(idx, rec)| {
                    json!({
                        "rank": idx + 1,
                        "id": rec.id,
                        "tags": catalog.get(&rec.id).map(|item| item.tags.as_str()),
                        "score": rec.score,
                    })
                })
                .collect();
            print_json(&json!({
                "query": args.preferences,
                "vocabulary": vocabulary,
                "shape": [catalog.len(), vocabulary.len()],
                "recommendations": recommendations,
            }))?;
        }
        OutputFormat::Human => {
            if args.show_vocabulary {
                print_vocabulary(catalog.len(), &vocabulary);
            }
            if !cli.quiet {
                print_banner("TOP MOVIE RECOMMENDATIONS");
            }
            for (idx, rec) in results.iter().enumerate() {
                println!("{}. {}", idx + 1, rec.id);
                if let Some(item) = catalog.get(&rec.id) {
                    println!("   Genres: {}", item.tags);
                }
                println!("   Match Score: {}", format_similarity(rec.score));
                if !cli.quiet {
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn print_vocabulary(documents: usize, vocabulary: &[&str]) {
    println!(
        "Vectorized genres shape: ({}, {})",
        documents,
        vocabulary.len()
    );
    println!("Feature names: {}", vocabulary.join(", "));
}
