//! `cinerec similarity` command - show the user similarity matrix
//!
//! Without `--user` the full square matrix is printed; with it, only that
//! user's row. `--rate` assignments apply to `--user` (or `Current_User`).

use serde_json::json;

use crate::cli::{Cli, OutputFormat, SimilarityArgs};
use crate::commands::data::load_ratings;
use crate::commands::render::{format_similarity, print_json};
use cinerec_core::bail_not_found;
use cinerec_core::error::Result;
use cinerec_core::ratings::UserSimilarityMatrix;
use cinerec_core::sample::CURRENT_USER;

/// Execute the similarity command
pub fn execute(cli: &Cli, args: &SimilarityArgs) -> Result<()> {
    let target = args.user.as_deref().unwrap_or(CURRENT_USER);
    let matrix = load_ratings(&args.ratings, target)?;
    let similarity = matrix.similarity_matrix();

    let rows: Vec<&str> = match args.user.as_deref() {
        Some(user) => {
            if similarity.row(user).is_none() {
                bail_not_found!("user", user);
            }
            vec![user]
        }
        None => similarity.users().iter().map(String::as_str).collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|user| {
                    json!({
                        "user": user,
                        "similarities": similarity.row(user),
                    })
                })
                .collect();
            print_json(&json!({
                "users": similarity.users(),
                "rows": entries,
            }))?;
        }
        OutputFormat::Human => print_table(cli, similarity, &rows),
    }

    Ok(())
}

fn print_table(cli: &Cli, similarity: &UserSimilarityMatrix, rows: &[&str]) {
    let width = similarity
        .users()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(5);

    if !cli.quiet {
        println!("User Similarity Matrix:");
        print!("{:width$}", "", width = width);
        for user in similarity.users() {
            print!("  {:>width$}", user, width = width);
        }
        println!();
    }

    for user in rows {
        let Some(values) = similarity.row(user) else {
            continue;
        };
        print!("{:width$}", user, width = width);
        for value in values {
            print!("  {:>width$}", format_similarity(*value), width = width);
        }
        println!();
    }
}
