//! User × item rating matrix with a lazily derived user similarity view

mod similarity;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{extension, Catalog};
use crate::error::{CinerecError, Result};
use crate::{bail_invalid, bail_not_found};

pub use similarity::UserSimilarityMatrix;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// A rating in `0..=5`, where 0 means "not rated"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// The "not rated" sentinel
    pub const UNRATED: Rating = Rating(0);

    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_RATING => Ok(Rating(v)),
            _ => Err(CinerecError::invalid_argument(
                "rating (expected 0-5)",
                value,
            )),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CinerecError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sparse user × item ratings
///
/// Users keep insertion order and items keep catalog order; both orders are
/// tie-breaks for the collaborative recommender. The user similarity matrix
/// is computed on first access after a mutation and cached until the next
/// one.
#[derive(Debug, Clone, Default)]
pub struct RatingMatrix {
    items: Vec<String>,
    item_positions: HashMap<String, usize>,
    users: Vec<String>,
    user_positions: HashMap<String, usize>,
    rows: Vec<Vec<Rating>>,
    similarity: OnceLock<UserSimilarityMatrix>,
}

/// On-disk ratings layout; each row is positional against `items`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsFile {
    pub items: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserRatings>,
}

/// One user's positional ratings in a [`RatingsFile`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRatings {
    pub name: String,
    pub ratings: Vec<i64>,
}

impl RatingMatrix {
    /// Create an empty matrix over the given items, rejecting duplicates
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let mut item_positions = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item_positions.insert(item.clone(), idx).is_some() {
                return Err(CinerecError::already_exists("rated item", item));
            }
        }
        Ok(RatingMatrix {
            items,
            item_positions,
            ..Default::default()
        })
    }

    /// Create an empty matrix over every item of a catalog, in catalog order
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let items: Vec<String> = catalog.items().iter().map(|i| i.id.clone()).collect();
        let item_positions = items
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        RatingMatrix {
            items,
            item_positions,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn has_user(&self, user: &str) -> bool {
        self.user_positions.contains_key(user)
    }

    pub fn item_position(&self, item: &str) -> Option<usize> {
        self.item_positions.get(item).copied()
    }

    pub fn user_position(&self, user: &str) -> Option<usize> {
        self.user_positions.get(user).copied()
    }

    /// Register a user with no ratings; existing users are left untouched
    pub fn add_user(&mut self, user: &str) -> usize {
        if let Some(idx) = self.user_position(user) {
            return idx;
        }
        let idx = self.users.len();
        self.users.push(user.to_string());
        self.user_positions.insert(user.to_string(), idx);
        self.rows.push(vec![Rating::UNRATED; self.items.len()]);
        self.similarity.take();
        idx
    }

    /// Record one rating; unknown users are added
    ///
    /// Fails without touching the matrix when the rating is outside `0..=5`
    /// or the item is unknown.
    pub fn record_rating(&mut self, user: &str, item: &str, rating: i64) -> Result<()> {
        let rating = Rating::new(rating)?;
        let Some(item_idx) = self.item_position(item) else {
            bail_not_found!("item", item);
        };

        let user_idx = self.add_user(user);
        self.rows[user_idx][item_idx] = rating;
        self.similarity.take();
        debug!(user, item, rating = rating.value(), "record_rating");
        Ok(())
    }

    /// Record a user's full row of ratings, positional in item order
    ///
    /// The whole row is validated before anything is written.
    pub fn record_user_ratings(&mut self, user: &str, ratings: &[i64]) -> Result<()> {
        if ratings.len() != self.items.len() {
            bail_invalid!(
                "ratings row length",
                format!(
                    "{} for user {} (expected {})",
                    ratings.len(),
                    user,
                    self.items.len()
                )
            );
        }
        let row = ratings
            .iter()
            .map(|&value| Rating::new(value))
            .collect::<Result<Vec<_>>>()?;

        let user_idx = self.add_user(user);
        self.rows[user_idx] = row;
        self.similarity.take();
        debug!(user, items = ratings.len(), "record_user_ratings");
        Ok(())
    }

    pub fn rating(&self, user: &str, item: &str) -> Option<Rating> {
        let user_idx = self.user_position(user)?;
        let item_idx = self.item_position(item)?;
        Some(self.rows[user_idx][item_idx])
    }

    /// A user's ratings in item order
    pub fn user_ratings(&self, user: &str) -> Option<&[Rating]> {
        self.user_position(user).map(|idx| self.rows[idx].as_slice())
    }

    /// Pairwise user similarity, recomputed only after a mutation
    pub fn similarity_matrix(&self) -> &UserSimilarityMatrix {
        self.similarity.get_or_init(|| {
            debug!(users = self.users.len(), "similarity_cache_miss");
            UserSimilarityMatrix::compute(&self.users, &self.rows)
        })
    }

    /// Load a ratings file (`.json` or `.toml`)
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: RatingsFile = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => bail_invalid!(
                "ratings file extension (expected .json or .toml)",
                path.display()
            ),
        };
        debug!(path = %path.display(), users = file.users.len(), "load_ratings");
        Self::from_file(file)
    }

    /// Build a matrix from its file representation
    pub fn from_file(file: RatingsFile) -> Result<Self> {
        let mut matrix = RatingMatrix::new(file.items)?;
        for user in &file.users {
            matrix.record_user_ratings(&user.name, &user.ratings)?;
        }
        Ok(matrix)
    }

    /// File representation of the matrix
    pub fn to_file(&self) -> RatingsFile {
        RatingsFile {
            items: self.items.clone(),
            users: self
                .users
                .iter()
                .zip(&self.rows)
                .map(|(name, row)| UserRatings {
                    name: name.clone(),
                    ratings: row.iter().map(|r| i64::from(r.value())).collect(),
                })
                .collect(),
        }
    }

    /// Save as JSON or TOML depending on the file extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = self.to_file();
        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(&file)?,
            Some("toml") => toml::to_string_pretty(&file)
                .map_err(|e| CinerecError::Other(format!("failed to serialize ratings: {}", e)))?,
            _ => bail_invalid!(
                "ratings file extension (expected .json or .toml)",
                path.display()
            ),
        };
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
