//! TF-IDF vectorization and cosine similarity scoring

mod scorer;
mod vectorizer;

pub use scorer::{cosine_similarity, score, score_batch};
pub use vectorizer::{FeatureVector, TfidfVectorizer, VectorizerState};

#[cfg(test)]
mod tests;
