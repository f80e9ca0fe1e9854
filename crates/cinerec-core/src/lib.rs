//! Cinerec Core Library
//!
//! Recommendation engine for the cinerec CLI: TF-IDF content similarity
//! over item tags and user-similarity-weighted collaborative filtering.

pub mod catalog;
pub mod collaborative;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod ratings;
pub mod recommendation;
pub mod sample;
pub mod similarity;
pub mod text;

pub use catalog::{Catalog, Item};
pub use collaborative::{CollaborativeRecommender, Neighbor};
pub use content::ContentRecommender;
pub use error::{CinerecError, Result};
pub use ratings::{Rating, RatingMatrix, UserSimilarityMatrix};
pub use recommendation::Recommendation;
