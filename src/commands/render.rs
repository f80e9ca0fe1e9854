//! Shared output formatting helpers for commands

use serde::Serialize;

use cinerec_core::error::Result;

/// Width of the `=` rules around human-readable headers
pub const RULE_WIDTH: usize = 60;

/// Print a title framed by `=` rules
pub fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", rule);
    println!("{}", title);
    println!("{}", rule);
    println!();
}

/// Pretty-print a serializable value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Cosine similarity with three decimals
pub fn format_similarity(score: f64) -> String {
    format!("{:.3}", score)
}

/// Predicted rating with two decimals on the 5-point scale
pub fn format_predicted_rating(score: f64) -> String {
    format!("{:.2}/5", score)
}
