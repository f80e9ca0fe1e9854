//! Item catalog: ordered items with their tag strings
//!
//! Catalog order is significant. It is the stable tie-break for every
//! ranking produced by the engine (lower index wins).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{CinerecError, Result};

/// A catalog item: an identifier and its descriptive tag string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within a catalog (the movie title)
    pub id: String,
    /// Space-separated tags, kept verbatim for display
    pub tags: String,
}

impl Item {
    pub fn new(id: impl Into<String>, tags: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            tags: tags.into(),
        }
    }
}

/// Ordered, read-only collection of items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    positions: HashMap<String, usize>,
}

/// On-disk TOML layout: `[[items]]` tables
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from items, rejecting duplicate identifiers
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if positions.insert(item.id.clone(), idx).is_some() {
                return Err(CinerecError::already_exists("catalog item", &item.id));
            }
        }
        Ok(Catalog { items, positions })
    }

    /// Build a catalog from `(identifier, tags)` pairs
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, tags)| Item::new(id, tags))
                .collect(),
        )
    }

    /// Load a catalog from a `.json` (array of items) or `.toml` (`[[items]]`) file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let items = match extension(path).as_deref() {
            Some("json") => serde_json::from_str::<Vec<Item>>(&content)?,
            Some("toml") => toml::from_str::<CatalogFile>(&content)?.items,
            _ => {
                return Err(CinerecError::invalid_argument(
                    "catalog file extension (expected .json or .toml)",
                    path.display(),
                ))
            }
        };
        debug!(path = %path.display(), items = items.len(), "load_catalog");
        Self::new(items)
    }

    /// Save the catalog as JSON or TOML depending on the file extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(&self.items)?,
            Some("toml") => toml::to_string_pretty(&CatalogFile {
                items: self.items.clone(),
            })
            .map_err(|e| CinerecError::Other(format!("failed to serialize catalog: {}", e)))?,
            _ => {
                return Err(CinerecError::invalid_argument(
                    "catalog file extension (expected .json or .toml)",
                    path.display(),
                ))
            }
        };
        fs::write(path, content)?;
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.positions.get(id).map(|&idx| &self.items[idx])
    }

    /// Catalog index of an item identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Tag strings in catalog order, the corpus for the vectorizer
    pub fn tag_corpus(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.tags.as_str()).collect()
    }

    /// SHA-256 over every id and tag string in catalog order, hex encoded
    ///
    /// Fields are length-prefixed so shifting text between an id and its
    /// tags changes the digest.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for item in &self.items {
            for field in [&item.id, &item.tags] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
        }
        hex::encode(hasher.finalize())
    }
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
