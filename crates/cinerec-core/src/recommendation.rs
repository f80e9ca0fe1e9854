//! Ranked recommendation results shared by both recommenders

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{CinerecError, Result};

/// A recommended item with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item identifier
    pub id: String,
    /// Cosine similarity (0.0 to 1.0) or predicted rating (0.0 to 5.0)
    pub score: f64,
}

/// Validate a user-supplied count such as `top_n` or `k_neighbors`
///
/// Zero and negative values are rejected.
pub fn positive_count(context: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(CinerecError::invalid_argument(context, value));
    }
    usize::try_from(value).map_err(|_| CinerecError::invalid_argument(context, value))
}

pub(crate) fn require_nonzero(context: &str, value: usize) -> Result<()> {
    if value == 0 {
        crate::bail_invalid!(context, value);
    }
    Ok(())
}

/// Sort `(catalog index, id, score)` triples by descending score, breaking
/// ties by ascending catalog index, and keep the first `top_n`
pub(crate) fn rank(mut scored: Vec<(usize, String, f64)>, top_n: usize) -> Vec<Recommendation> {
    scored.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_n);
    scored
        .into_iter()
        .map(|(_, id, score)| Recommendation { id, score })
        .collect()
}
