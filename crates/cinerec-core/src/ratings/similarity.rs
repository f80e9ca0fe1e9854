use std::collections::HashMap;
use std::time::Instant;

use crate::ratings::Rating;
use crate::similarity::cosine_similarity;
use crate::trace_time;

/// Square, symmetric matrix of cosine similarities between user rating
/// vectors, with "unrated" counted as 0
///
/// Self-similarity is 1 for any user with at least one rating and 0 for a
/// user with none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserSimilarityMatrix {
    users: Vec<String>,
    positions: HashMap<String, usize>,
    values: Vec<Vec<f64>>,
}

impl UserSimilarityMatrix {
    pub(crate) fn compute(users: &[String], rows: &[Vec<Rating>]) -> Self {
        let start = Instant::now();

        let vectors: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.iter().map(|r| f64::from(r.value())).collect())
            .collect();

        let n = vectors.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let sim = cosine_similarity(&vectors[i], &vectors[j]);
                values[i][j] = sim;
                values[j][i] = sim;
            }
        }

        trace_time!(start, "compute_user_similarity", users = n);

        UserSimilarityMatrix {
            users: users.to_vec(),
            positions: users
                .iter()
                .enumerate()
                .map(|(idx, user)| (user.clone(), idx))
                .collect(),
            values,
        }
    }

    /// Users in insertion order (row/column order)
    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Similarity between two users, `None` if either is unknown
    pub fn get(&self, user_a: &str, user_b: &str) -> Option<f64> {
        let a = self.positions.get(user_a)?;
        let b = self.positions.get(user_b)?;
        Some(self.values[*a][*b])
    }

    /// One user's similarities to every user, in user order
    pub fn row(&self, user: &str) -> Option<&[f64]> {
        self.positions
            .get(user)
            .map(|&idx| self.values[idx].as_slice())
    }
}
