//! Loading catalogs and rating matrices for commands

use std::path::Path;

use cinerec_core::catalog::Catalog;
use cinerec_core::error::Result;
use cinerec_core::ratings::RatingMatrix;
use cinerec_core::sample;
use tracing::debug;

use crate::cli::args::RatingsArgs;

/// Load a catalog file, or the built-in movie catalog when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "load_catalog");
            Catalog::load(path)
        }
        None => sample::movie_catalog(),
    }
}

/// Load ratings and apply any `--rate` assignments to `target_user`
///
/// Assignments go through `record_rating`, so an unknown target is added
/// and an out-of-range rating or unknown item fails the whole command.
pub fn load_ratings(args: &RatingsArgs, target_user: &str) -> Result<RatingMatrix> {
    let mut matrix = match args.ratings.as_deref() {
        Some(path) => {
            debug!(path = %path.display(), "load_ratings");
            RatingMatrix::load(path)?
        }
        None => sample::movie_ratings()?,
    };

    for assignment in &args.rate {
        matrix.record_rating(target_user, &assignment.item, assignment.rating)?;
    }
    if !args.rate.is_empty() {
        debug!(user = target_user, count = args.rate.len(), "apply_ratings");
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::RatingAssignment;
    use cinerec_core::error::CinerecError;

    fn rate(item: &str, rating: i64) -> RatingAssignment {
        RatingAssignment {
            item: item.to_string(),
            rating,
        }
    }

    #[test]
    fn test_load_catalog_defaults_to_sample() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 50);
        assert!(catalog.get("The Matrix").is_some());
    }

    #[test]
    fn test_load_ratings_applies_assignments() {
        let args = RatingsArgs {
            ratings: None,
            rate: vec![rate("The Matrix", 5), rate("Inception", 4)],
        };
        let matrix = load_ratings(&args, sample::CURRENT_USER).unwrap();
        assert_eq!(
            matrix
                .rating(sample::CURRENT_USER, "The Matrix")
                .map(|r| r.value()),
            Some(5)
        );
    }

    #[test]
    fn test_load_ratings_adds_new_user() {
        let args = RatingsArgs {
            ratings: None,
            rate: vec![rate("The Matrix", 2)],
        };
        let matrix = load_ratings(&args, "Newcomer").unwrap();
        assert!(matrix.has_user("Newcomer"));
        assert_eq!(matrix.users().len(), 7);
        assert_eq!(
            matrix.rating("Newcomer", "The Matrix").map(|r| r.value()),
            Some(2)
        );
        assert!(!matrix.rating("Newcomer", "Inception").unwrap().is_rated());
    }

    #[test]
    fn test_load_ratings_rejects_out_of_range() {
        let args = RatingsArgs {
            ratings: None,
            rate: vec![rate("The Matrix", 7)],
        };
        let err = load_ratings(&args, sample::CURRENT_USER).unwrap_err();
        assert!(matches!(err, CinerecError::InvalidArgument { .. }));
    }

    #[test]
    fn test_load_ratings_rejects_unknown_item() {
        let args = RatingsArgs {
            ratings: None,
            rate: vec![rate("Heat", 3)],
        };
        let err = load_ratings(&args, sample::CURRENT_USER).unwrap_err();
        assert!(matches!(err, CinerecError::NotFound { .. }));
    }
}
