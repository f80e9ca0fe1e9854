#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::catalog::Catalog;
    use crate::error::CinerecError;
    use crate::ratings::{Rating, RatingMatrix, RatingsFile, UserRatings};
    use crate::sample::movie_ratings;
    use tempfile::tempdir;

    const EPSILON: f64 = 1e-4;

    fn trio() -> RatingMatrix {
        RatingMatrix::new(["Heat", "Ronin", "Collateral"]).unwrap()
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap(), Rating::UNRATED);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(Rating::new(3).unwrap().is_rated());
        assert!(!Rating::UNRATED.is_rated());

        for bad in [-1, 6, 7, 256, i64::MAX] {
            assert!(matches!(
                Rating::try_from(bad),
                Err(CinerecError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_record_rating_adds_user() {
        let mut matrix = trio();
        matrix.record_rating("alice", "Ronin", 4).unwrap();

        assert_eq!(matrix.users(), &["alice"]);
        assert_eq!(matrix.rating("alice", "Ronin").unwrap().value(), 4);
        assert_eq!(matrix.rating("alice", "Heat").unwrap(), Rating::UNRATED);
    }

    #[test]
    fn test_out_of_range_rating_leaves_matrix_unchanged() {
        let mut matrix = trio();
        matrix.record_rating("alice", "Heat", 3).unwrap();

        for bad in [7, -1] {
            let result = matrix.record_rating("alice", "Heat", bad);
            assert!(matches!(result, Err(CinerecError::InvalidArgument { .. })));
        }
        let result = matrix.record_rating("bob", "Heat", 9);
        assert!(matches!(result, Err(CinerecError::InvalidArgument { .. })));

        assert_eq!(matrix.rating("alice", "Heat").unwrap().value(), 3);
        assert!(!matrix.has_user("bob"));
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let mut matrix = trio();
        let result = matrix.record_rating("alice", "Jaws", 4);
        assert!(matches!(result, Err(CinerecError::NotFound { .. })));
        assert!(!matrix.has_user("alice"));
    }

    #[test]
    fn test_record_user_ratings_validates_whole_row() {
        let mut matrix = trio();
        matrix.record_user_ratings("alice", &[1, 2, 3]).unwrap();

        let result = matrix.record_user_ratings("alice", &[5, 5, 8]);
        assert!(matches!(result, Err(CinerecError::InvalidArgument { .. })));

        let result = matrix.record_user_ratings("alice", &[5, 5]);
        assert!(matches!(result, Err(CinerecError::InvalidArgument { .. })));

        let row: Vec<u8> = matrix
            .user_ratings("alice")
            .unwrap()
            .iter()
            .map(|r| r.value())
            .collect();
        assert_eq!(row, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_items_rejected() {
        let result = RatingMatrix::new(["Heat", "Heat"]);
        assert!(matches!(result, Err(CinerecError::AlreadyExists { .. })));
    }

    #[test]
    fn test_for_catalog_uses_catalog_order() {
        let catalog = Catalog::from_pairs([("B", "Drama"), ("A", "Comedy")]).unwrap();
        let matrix = RatingMatrix::for_catalog(&catalog);
        assert_eq!(matrix.items(), &["B", "A"]);
        assert_eq!(matrix.item_position("A"), Some(1));
    }

    #[test]
    fn test_similarity_matrix_is_symmetric_with_unit_diagonal() {
        let matrix = movie_ratings().unwrap();
        let sim = matrix.similarity_matrix();
        assert_eq!(sim.len(), 6);

        for a in ["User1", "User2", "User3", "User4", "User5"] {
            assert!((sim.get(a, a).unwrap() - 1.0).abs() < 1e-9);
            for b in ["User1", "User2", "User3", "User4", "User5"] {
                assert_eq!(sim.get(a, b), sim.get(b, a));
            }
        }

        assert!((sim.get("User1", "User3").unwrap() - 0.6279).abs() < EPSILON);
        assert!((sim.get("User2", "User4").unwrap() - 0.6521).abs() < EPSILON);
        assert!((sim.get("User3", "User5").unwrap() - 0.6805).abs() < EPSILON);
    }

    #[test]
    fn test_unrated_user_has_zero_similarity() {
        let matrix = movie_ratings().unwrap();
        let sim = matrix.similarity_matrix();
        let row = sim.row("Current_User").unwrap();
        assert!(row.iter().all(|&value| value == 0.0));
        assert_eq!(sim.get("Current_User", "nobody"), None);
    }

    #[test]
    fn test_similarity_recomputed_after_mutation() {
        let mut matrix = trio();
        matrix.record_user_ratings("alice", &[5, 0, 0]).unwrap();
        matrix.record_user_ratings("bob", &[0, 5, 0]).unwrap();
        assert_eq!(matrix.similarity_matrix().get("alice", "bob"), Some(0.0));

        matrix.record_rating("bob", "Heat", 5).unwrap();
        let updated = matrix.similarity_matrix().get("alice", "bob").unwrap();
        assert!(updated > 0.0);

        matrix.add_user("carol");
        assert_eq!(matrix.similarity_matrix().len(), 3);
    }

    #[test]
    fn test_add_user_is_idempotent() {
        let mut matrix = trio();
        assert_eq!(matrix.add_user("alice"), 0);
        matrix.record_rating("alice", "Heat", 2).unwrap();
        assert_eq!(matrix.add_user("alice"), 0);
        assert_eq!(matrix.rating("alice", "Heat").unwrap().value(), 2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let matrix = movie_ratings().unwrap();

        for name in ["ratings.json", "ratings.toml"] {
            let path = dir.path().join(name);
            matrix.save(&path).unwrap();
            let loaded = RatingMatrix::load(&path).unwrap();
            assert_eq!(loaded.items(), matrix.items());
            assert_eq!(loaded.users(), matrix.users());
            assert_eq!(
                loaded.user_ratings("User4").unwrap(),
                matrix.user_ratings("User4").unwrap()
            );
        }
    }

    #[test]
    fn test_from_file_rejects_invalid_rows() {
        let file = RatingsFile {
            items: vec!["Heat".to_string()],
            users: vec![UserRatings {
                name: "alice".to_string(),
                ratings: vec![6],
            }],
        };
        assert!(matches!(
            RatingMatrix::from_file(file),
            Err(CinerecError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_load_toml_ratings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ratings.toml");
        std::fs::write(
            &path,
            r#"
items = ["Heat", "Ronin"]

[[users]]
name = "alice"
ratings = [4, 0]
"#,
        )
        .unwrap();

        let matrix = RatingMatrix::load(&path).unwrap();
        assert_eq!(matrix.rating("alice", "Heat").unwrap().value(), 4);
        assert!(!matrix.rating("alice", "Ronin").unwrap().is_rated());
    }
}
