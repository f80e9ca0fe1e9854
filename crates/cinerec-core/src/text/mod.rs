//! Text processing utilities for tokenization

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at",
            "be", "been", "but", "by", "can", "could", "do", "does", "for", "from", "had", "has",
            "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my",
            "no", "not", "of", "on", "or", "our", "she", "so", "such", "than", "that", "the",
            "their", "them", "then", "there", "these", "they", "this", "to", "too", "us", "very",
            "was", "we", "were", "what", "when", "which", "who", "will", "with", "would", "you",
            "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Stop-word filtering mode for the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// Drop common English words (default)
    #[default]
    Enabled,
    /// Keep every token
    Disabled,
}

impl From<bool> for StopWords {
    fn from(enabled: bool) -> Self {
        if enabled {
            StopWords::Enabled
        } else {
            StopWords::Disabled
        }
    }
}

/// Word tokenizer splitting on non-alphanumeric characters
///
/// Tokens are lower-cased; empty fragments are dropped, and stop words are
/// dropped when `stop_words` is enabled.
pub fn tokenize(text: &str, stop_words: StopWords) -> Vec<String> {
    let filter = match stop_words {
        StopWords::Enabled => Some(get_stop_words()),
        StopWords::Disabled => None,
    };
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .filter(|s| !filter.is_some_and(|words| words.contains(s)))
        .map(|s| s.to_string())
        .collect()
}
