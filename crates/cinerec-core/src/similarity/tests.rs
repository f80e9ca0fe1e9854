#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::error::CinerecError;
    use crate::similarity::{
        cosine_similarity, score, score_batch, FeatureVector, TfidfVectorizer,
    };
    use crate::text::StopWords;

    const EPSILON: f64 = 1e-9;

    fn genre_corpus() -> Vec<&'static str> {
        vec!["Action Sci-Fi", "Drama Crime", "Crime Drama"]
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let corpus: Vec<&str> = Vec::new();
        let result = TfidfVectorizer::default().fit(&corpus);
        assert!(matches!(result, Err(CinerecError::EmptyCorpus)));
    }

    #[test]
    fn test_fit_corpus_of_only_stop_words_fails() {
        let result = TfidfVectorizer::new(StopWords::Enabled).fit(&["the and", "of a"]);
        assert!(matches!(result, Err(CinerecError::EmptyCorpus)));
    }

    #[test]
    fn test_smoothed_idf_weights() {
        let state = TfidfVectorizer::default().fit(&genre_corpus()).unwrap();

        // N = 3; "action" appears in 1 document, "drama" in 2
        let expected_action = (4.0_f64 / 2.0).ln() + 1.0;
        let expected_drama = (4.0_f64 / 3.0).ln() + 1.0;

        assert!((state.idf("action").unwrap() - expected_action).abs() < EPSILON);
        assert!((state.idf("drama").unwrap() - expected_drama).abs() < EPSILON);
        assert_eq!(state.idf("western"), None);
    }

    #[test]
    fn test_token_in_every_document_has_unit_idf() {
        let state = TfidfVectorizer::default()
            .fit(&["drama war", "drama romance", "drama"])
            .unwrap();
        assert!((state.idf("drama").unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vocabulary_is_sorted_and_deduplicated() {
        let state = TfidfVectorizer::default().fit(&genre_corpus()).unwrap();
        let vocabulary: Vec<&str> = state.vocabulary().collect();
        assert_eq!(vocabulary, vec!["action", "crime", "drama", "fi", "sci"]);
        assert_eq!(state.len(), 5);
        assert_eq!(state.documents(), 3);
    }

    #[test]
    fn test_fit_is_idempotent() {
        let vectorizer = TfidfVectorizer::default();
        let first = vectorizer.fit(&genre_corpus()).unwrap();
        let second = vectorizer.fit(&genre_corpus()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fitted_vectors_are_unit_length() {
        let (_, vectors) = TfidfVectorizer::default()
            .fit_transform(&genre_corpus())
            .unwrap();
        for vector in &vectors {
            assert!((vector.norm() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_self_similarity_is_one() {
        let corpus = [
            "Action Adventure Sci-Fi Thriller",
            "Crime Drama Mystery Thriller",
            "Animation Comedy Family",
        ];
        let (_, vectors) = TfidfVectorizer::default().fit_transform(&corpus).unwrap();
        for vector in &vectors {
            assert!((score(vector, vector) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_raw_term_frequency_is_counted() {
        let state = TfidfVectorizer::default()
            .fit(&["drama crime", "drama", "crime"])
            .unwrap();
        let vector = state.transform("drama drama crime");

        // Both tokens share idf, so the weight ratio is the count ratio
        let ratio = vector.weight("drama") / vector.weight("crime");
        assert!((ratio - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_unknown_text_is_zero_vector() {
        let state = TfidfVectorizer::default().fit(&genre_corpus()).unwrap();

        let empty = state.transform("");
        let blank = state.transform("   \t");
        let unknown = state.transform("Western Musical");

        for vector in [&empty, &blank, &unknown] {
            assert!(vector.is_zero());
            assert_eq!(vector.dim(), state.len());
        }
    }

    #[test]
    fn test_zero_vector_scores_zero_against_everything() {
        let (state, vectors) = TfidfVectorizer::default()
            .fit_transform(&genre_corpus())
            .unwrap();
        let query = state.transform("   ");

        let scores = score_batch(&query, &vectors);
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
        assert_eq!(score(&query, &query), 0.0);
    }

    #[test]
    fn test_out_of_vocabulary_tokens_are_dropped() {
        let state = TfidfVectorizer::default().fit(&genre_corpus()).unwrap();
        let with_noise = state.transform("Action Western");
        let clean = state.transform("Action");
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn test_score_batch_preserves_candidate_order() {
        let (state, vectors) = TfidfVectorizer::default()
            .fit_transform(&genre_corpus())
            .unwrap();
        let query = state.transform("Action Sci-Fi");

        let scores = score_batch(&query, &vectors);
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 1.0).abs() < EPSILON);
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let corpus = [
            "Action Crime Drama Thriller",
            "Crime Drama",
            "Drama Mystery Thriller",
            "Animation Adventure Comedy",
        ];
        let (state, vectors) = TfidfVectorizer::default().fit_transform(&corpus).unwrap();
        let query = state.transform("Drama, Thriller");

        for value in score_batch(&query, &vectors) {
            assert!((0.0..=1.0 + EPSILON).contains(&value));
        }
    }

    #[test]
    fn test_duplicate_documents_score_one_without_clamping() {
        let corpus = [
            "Action Adventure Drama Sci-Fi Thriller",
            "Action Adventure Drama Sci-Fi Thriller",
            "Comedy Romance",
        ];
        let (state, vectors) = TfidfVectorizer::default().fit_transform(&corpus).unwrap();
        let query = state.transform("thriller, sci-fi, drama, adventure, action");

        let scores = score_batch(&query, &vectors);
        assert!((scores[0] - 1.0).abs() < EPSILON);
        assert_eq!(scores[0], scores[1]);
        assert_eq!(scores[0], query.dot(&vectors[0]));
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_zero_feature_vectors_compare_as_zero() {
        let a = FeatureVector::zero(4);
        let b = FeatureVector::zero(4);
        assert_eq!(score(&a, &b), 0.0);
    }

    #[test]
    fn test_dense_cosine_similarity() {
        let a = [5.0, 4.0, 0.0];
        let b = [5.0, 4.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPSILON);

        let orthogonal = [0.0, 0.0, 3.0];
        assert_eq!(cosine_similarity(&a, &orthogonal), 0.0);

        let zero = [0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&a, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }
}
