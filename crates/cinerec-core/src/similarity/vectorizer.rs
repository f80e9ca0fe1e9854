use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::error::{CinerecError, Result};
use crate::text::{tokenize, StopWords};
use crate::trace_time;

/// Sparse TF-IDF feature vector over a fitted vocabulary
///
/// Only non-zero weights are stored. Vectors produced by a fitted
/// [`VectorizerState`] are L2-normalized unless they are the zero vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    dim: usize,
    weights: BTreeMap<String, f64>,
}

impl FeatureVector {
    /// Zero vector of the given dimensionality
    pub fn zero(dim: usize) -> Self {
        FeatureVector {
            dim,
            weights: BTreeMap::new(),
        }
    }

    /// Dimensionality: the size of the vocabulary the vector was built over
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Non-zero (token, weight) pairs in token order
    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product; iterates the sparser side
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(token, weight)| large.weights.get(token).map(|w| weight * w))
            .sum()
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for weight in self.weights.values_mut() {
                *weight /= norm;
            }
        }
        self
    }
}

/// Fitted vectorizer: vocabulary with per-token inverse document frequency
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerState {
    idf: BTreeMap<String, f64>,
    documents: usize,
    stop_words: StopWords,
}

impl VectorizerState {
    /// Vocabulary tokens in sorted order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }

    /// Inverse document frequency of a token, `None` if out of vocabulary
    pub fn idf(&self, token: &str) -> Option<f64> {
        self.idf.get(token).copied()
    }

    /// Vocabulary size, the dimensionality of every produced vector
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Number of documents the state was fitted on
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn stop_words(&self) -> StopWords {
        self.stop_words
    }

    /// Project text into the fitted feature space
    ///
    /// Out-of-vocabulary tokens contribute nothing. Text with no known token
    /// yields the zero vector.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        for token in tokenize(text, self.stop_words) {
            if let Some(&idf) = self.idf.get(&token) {
                *weights.entry(token).or_insert(0.0) += idf;
            }
        }

        FeatureVector {
            dim: self.idf.len(),
            weights,
        }
        .normalized()
    }
}

/// TF-IDF vectorizer with smoothed IDF: `ln((1 + N) / (1 + df)) + 1`
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
}

impl TfidfVectorizer {
    pub fn new(stop_words: StopWords) -> Self {
        TfidfVectorizer { stop_words }
    }

    /// Fit vocabulary and IDF weights on a corpus of documents
    ///
    /// Fails with [`CinerecError::EmptyCorpus`] when there are no documents or
    /// the documents contain no usable token.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Result<VectorizerState> {
        let start = Instant::now();

        if corpus.is_empty() {
            return Err(CinerecError::EmptyCorpus);
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in corpus {
            let unique: HashSet<String> = tokenize(doc.as_ref(), self.stop_words)
                .into_iter()
                .collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(CinerecError::EmptyCorpus);
        }

        let total_docs = corpus.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(token, df)| {
                let idf = ((1.0 + total_docs) / (1.0 + df as f64)).ln() + 1.0;
                (token, idf)
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            documents = corpus.len(),
            vocabulary = idf.len(),
            "fit_vectorizer"
        );
        trace_time!(start, "fit_vectorizer");

        Ok(VectorizerState {
            idf,
            documents: corpus.len(),
            stop_words: self.stop_words,
        })
    }

    /// Fit on a corpus and vectorize each of its documents
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        corpus: &[S],
    ) -> Result<(VectorizerState, Vec<FeatureVector>)> {
        let state = self.fit(corpus)?;
        let vectors = corpus
            .iter()
            .map(|doc| state.transform(doc.as_ref()))
            .collect();
        Ok((state, vectors))
    }

    /// Vectorize text with a previously fitted state
    pub fn transform(&self, state: &VectorizerState, text: &str) -> FeatureVector {
        state.transform(text)
    }
}
