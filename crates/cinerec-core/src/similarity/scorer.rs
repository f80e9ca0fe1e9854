use crate::similarity::vectorizer::FeatureVector;

/// Cosine similarity of two normalized feature vectors
///
/// Both vectors are unit length (or zero), so this is a plain dot product.
/// A zero vector on either side scores 0. Weights are non-negative, so the
/// result lies in `[0, 1]` up to rounding.
pub fn score(query: &FeatureVector, candidate: &FeatureVector) -> f64 {
    if query.is_zero() || candidate.is_zero() {
        return 0.0;
    }
    query.dot(candidate)
}

/// Score a query against every candidate, preserving candidate order
pub fn score_batch(query: &FeatureVector, candidates: &[FeatureVector]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| score(query, candidate))
        .collect()
}

/// Cosine similarity of two dense vectors of equal length
///
/// Used for rating vectors, which are not pre-normalized. Returns 0 when
/// either vector has zero magnitude.
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in vec_a.iter().zip(vec_b) {
        dot_product += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}
