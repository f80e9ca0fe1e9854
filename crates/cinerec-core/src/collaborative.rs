//! Collaborative filtering: predict ratings for a user's unrated items from
//! the ratings of the most similar other users

use std::cmp::Ordering;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::ratings::{Rating, RatingMatrix};
use crate::recommendation::{rank, require_nonzero, Recommendation};
use crate::{bail_not_found, trace_time};

/// Default number of neighbors consulted per prediction
pub const DEFAULT_K_NEIGHBORS: usize = 3;

/// Default number of collaborative recommendations
pub const DEFAULT_TOP_N: usize = 3;

/// A user selected for weighted rating prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub user: String,
    pub similarity: f64,
}

/// Collaborative recommender with fixed neighbor and result counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollaborativeRecommender {
    k_neighbors: usize,
    top_n: usize,
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        CollaborativeRecommender {
            k_neighbors: DEFAULT_K_NEIGHBORS,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl CollaborativeRecommender {
    pub fn new(k_neighbors: usize, top_n: usize) -> Result<Self> {
        require_nonzero("k_neighbors", k_neighbors)?;
        require_nonzero("top_n", top_n)?;
        Ok(CollaborativeRecommender { k_neighbors, top_n })
    }

    pub fn k_neighbors(&self) -> usize {
        self.k_neighbors
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// The `k_neighbors` users most similar to `target_user`
    pub fn neighbors(&self, matrix: &RatingMatrix, target_user: &str) -> Result<Vec<Neighbor>> {
        select_neighbors(matrix, target_user, self.k_neighbors)
    }

    /// Predicted ratings for `target_user`'s unrated items, best first
    pub fn recommend(
        &self,
        matrix: &RatingMatrix,
        target_user: &str,
    ) -> Result<Vec<Recommendation>> {
        recommend(matrix, target_user, self.k_neighbors, self.top_n)
    }
}

/// Select the `k` users most similar to `target_user`
///
/// The target is excluded by identity. Ties keep user insertion order.
/// Users with zero similarity remain eligible.
pub fn select_neighbors(
    matrix: &RatingMatrix,
    target_user: &str,
    k: usize,
) -> Result<Vec<Neighbor>> {
    require_nonzero("k_neighbors", k)?;
    let similarity = matrix.similarity_matrix();
    let Some(row) = similarity.row(target_user) else {
        bail_not_found!("user", target_user);
    };

    let mut candidates: Vec<Neighbor> = similarity
        .users()
        .iter()
        .zip(row)
        .filter(|(user, _)| user.as_str() != target_user)
        .map(|(user, &sim)| Neighbor {
            user: user.clone(),
            similarity: sim,
        })
        .collect();

    // Stable sort keeps insertion order among equal similarities
    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(k);
    Ok(candidates)
}

/// Predict ratings for every item `target_user` has not rated
///
/// prediction = Σ(sim × rating) / Σ|sim| over the selected neighbors that
/// rated the item. Items no neighbor rated, or whose contributing neighbors
/// all have zero similarity, are omitted. Results are sorted by prediction
/// with catalog order breaking ties, and truncated to `top_n`.
pub fn recommend(
    matrix: &RatingMatrix,
    target_user: &str,
    k_neighbors: usize,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    let start = Instant::now();
    require_nonzero("top_n", top_n)?;

    let neighbors = select_neighbors(matrix, target_user, k_neighbors)?;
    let Some(target_row) = matrix.user_ratings(target_user) else {
        bail_not_found!("user", target_user);
    };

    let neighbor_rows: Vec<(f64, &[Rating])> = neighbors
        .iter()
        .filter_map(|n| matrix.user_ratings(&n.user).map(|row| (n.similarity, row)))
        .collect();

    let mut predictions = Vec::new();
    for (item_idx, item) in matrix.items().iter().enumerate() {
        if target_row[item_idx].is_rated() {
            continue;
        }

        let mut weighted_sum = 0.0;
        let mut similarity_sum = 0.0;
        for (similarity, row) in &neighbor_rows {
            let rating = row[item_idx];
            if rating.is_rated() {
                weighted_sum += similarity * f64::from(rating.value());
                similarity_sum += similarity.abs();
            }
        }

        if similarity_sum > 0.0 {
            predictions.push((item_idx, item.clone(), weighted_sum / similarity_sum));
        }
    }

    debug!(
        user = target_user,
        neighbors = ?neighbors.iter().map(|n| n.user.as_str()).collect::<Vec<_>>(),
        predictions = predictions.len(),
        "collaborative_recommend"
    );

    let results = rank(predictions, top_n);
    trace_time!(start, "collaborative_recommend");
    Ok(results)
}
