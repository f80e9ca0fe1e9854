//! Content-based recommendation: rank catalog items against a free-text
//! preference query using TF-IDF vectors of their tag strings

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::recommendation::{rank, require_nonzero, Recommendation};
use crate::similarity::{score_batch, FeatureVector, TfidfVectorizer, VectorizerState};
use crate::text::StopWords;
use crate::{bail_invalid, trace_time};

/// Default number of content recommendations
pub const DEFAULT_TOP_N: usize = 5;

/// Vectorizer fit cached against a catalog fingerprint
#[derive(Debug, Clone)]
struct FittedCatalog {
    fingerprint: String,
    state: VectorizerState,
    vectors: Vec<FeatureVector>,
}

/// Content recommender
///
/// Reuses its vectorizer fit across calls as long as the catalog content is
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContentRecommender {
    vectorizer: TfidfVectorizer,
    fitted: Option<FittedCatalog>,
}

impl ContentRecommender {
    pub fn new(stop_words: StopWords) -> Self {
        ContentRecommender {
            vectorizer: TfidfVectorizer::new(stop_words),
            fitted: None,
        }
    }

    /// Fitted vectorizer state from the last call, if any
    pub fn state(&self) -> Option<&VectorizerState> {
        self.fitted.as_ref().map(|fitted| &fitted.state)
    }

    /// Rank catalog items by cosine similarity to `preference_text`
    ///
    /// Ties keep catalog order. `top_n` larger than the catalog returns the
    /// whole catalog ranked.
    pub fn recommend(
        &mut self,
        catalog: &Catalog,
        preference_text: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        let start = Instant::now();

        if preference_text.trim().is_empty() {
            bail_invalid!("preference text", format!("{:?}", preference_text));
        }
        require_nonzero("top_n", top_n)?;

        let fitted = self.fit_catalog(catalog)?;
        let query = fitted.state.transform(preference_text);
        let scores = score_batch(&query, &fitted.vectors);

        let scored = catalog
            .items()
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(idx, (item, score))| (idx, item.id.clone(), score))
            .collect();

        let results = rank(scored, top_n);
        debug!(
            query = preference_text,
            query_terms = query.weights().len(),
            results = results.len(),
            "content_recommend"
        );
        trace_time!(start, "content_recommend");
        Ok(results)
    }

    fn fit_catalog(&mut self, catalog: &Catalog) -> Result<&FittedCatalog> {
        let fingerprint = catalog.fingerprint();

        let fitted = match self.fitted.take() {
            Some(fitted) if fitted.fingerprint == fingerprint => {
                debug!(%fingerprint, "vectorizer_cache_hit");
                fitted
            }
            _ => {
                debug!(%fingerprint, "vectorizer_cache_miss");
                let (state, vectors) = self.vectorizer.fit_transform(&catalog.tag_corpus())?;
                FittedCatalog {
                    fingerprint,
                    state,
                    vectors,
                }
            }
        };

        Ok(&*self.fitted.insert(fitted))
    }
}

/// One-shot content recommendation with default tokenization
pub fn recommend(
    catalog: &Catalog,
    preference_text: &str,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    ContentRecommender::default().recommend(catalog, preference_text, top_n)
}
