//! Engine configuration
//!
//! Stored as TOML; every field has a default so a missing file or a partial
//! file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collaborative::{self, CollaborativeRecommender};
use crate::content::{self, ContentRecommender};
use crate::error::{CinerecError, Result};
use crate::text::StopWords;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Content-based recommender settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Collaborative recommender settings
    #[serde(default)]
    pub collaborative: CollaborativeConfig,
}

/// Configuration for content-based recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Number of items returned (default 5)
    #[serde(default = "default_content_top_n")]
    pub top_n: usize,

    /// Drop common English words during tokenization (default true)
    #[serde(default = "default_stop_words")]
    pub stop_words: bool,
}

/// Configuration for collaborative filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeConfig {
    /// Neighbors consulted per prediction (default 3)
    #[serde(default = "default_k_neighbors")]
    pub k_neighbors: usize,

    /// Number of predictions returned (default 3)
    #[serde(default = "default_collaborative_top_n")]
    pub top_n: usize,
}

fn default_content_top_n() -> usize {
    content::DEFAULT_TOP_N
}

fn default_stop_words() -> bool {
    true
}

fn default_k_neighbors() -> usize {
    collaborative::DEFAULT_K_NEIGHBORS
}

fn default_collaborative_top_n() -> usize {
    collaborative::DEFAULT_TOP_N
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            top_n: default_content_top_n(),
            stop_words: default_stop_words(),
        }
    }
}

impl Default for CollaborativeConfig {
    fn default() -> Self {
        Self {
            k_neighbors: default_k_neighbors(),
            top_n: default_collaborative_top_n(),
        }
    }
}

impl ContentConfig {
    pub fn stop_words(&self) -> StopWords {
        StopWords::from(self.stop_words)
    }

    /// Build a content recommender with these settings
    pub fn recommender(&self) -> ContentRecommender {
        ContentRecommender::new(self.stop_words())
    }
}

impl CollaborativeConfig {
    /// Build a collaborative recommender, validating the counts
    pub fn recommender(&self) -> Result<CollaborativeRecommender> {
        CollaborativeRecommender::new(self.k_neighbors, self.top_n)
    }
}

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CinerecError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
