//! Built-in sample datasets: a genre-tagged movie catalog and a small
//! user rating matrix

use crate::catalog::{Catalog, Item};
use crate::error::Result;
use crate::ratings::RatingMatrix;

/// Name of the all-unrated user in [`movie_ratings`]
pub const CURRENT_USER: &str = "Current_User";

const MOVIES: &[(&str, &str)] = &[
    ("The Shawshank Redemption", "Drama Crime"),
    ("The Godfather", "Crime Drama"),
    ("The Dark Knight", "Action Crime Drama Thriller"),
    ("Pulp Fiction", "Crime Drama"),
    ("Fight Club", "Drama"),
    ("Inception", "Action Adventure Sci-Fi Thriller"),
    ("Goodfellas", "Biography Crime Drama"),
    ("The Matrix", "Action Sci-Fi"),
    ("Seven", "Crime Drama Mystery Thriller"),
    ("Interstellar", "Adventure Drama Sci-Fi"),
    ("Parasite", "Comedy Drama Thriller"),
    ("Joker", "Crime Drama Thriller"),
    ("Whiplash", "Drama Music"),
    ("The Departed", "Crime Drama Thriller"),
    ("The Prestige", "Drama Mystery Thriller"),
    ("Memento", "Mystery Thriller"),
    ("Gladiator", "Action Adventure Drama"),
    ("The Lion King", "Animation Adventure Drama"),
    ("Alien", "Horror Sci-Fi"),
    ("The Terminator", "Action Sci-Fi"),
    ("Back to the Future", "Adventure Comedy Sci-Fi"),
    ("Raiders of the Lost Ark", "Action Adventure"),
    ("Die Hard", "Action Thriller"),
    ("The Silence of the Lambs", "Crime Drama Thriller"),
    ("Saving Private Ryan", "Drama War"),
    ("The Green Mile", "Crime Drama Fantasy"),
    ("Forrest Gump", "Drama Romance"),
    ("Schindler's List", "Biography Drama History"),
    ("The Usual Suspects", "Crime Mystery Thriller"),
    ("Se7en", "Crime Drama Mystery Thriller"),
    ("The Sixth Sense", "Drama Mystery Thriller"),
    ("American Beauty", "Drama"),
    ("The Shining", "Drama Horror"),
    ("Braveheart", "Biography Drama History"),
    ("Good Will Hunting", "Drama Romance"),
    ("Toy Story", "Animation Adventure Comedy"),
    ("Finding Nemo", "Animation Adventure Comedy"),
    ("Up", "Animation Adventure Comedy"),
    ("The Incredibles", "Animation Action Adventure"),
    ("Ratatouille", "Animation Comedy Family"),
    ("The Dark Knight Rises", "Action Thriller"),
    ("Avengers: Infinity War", "Action Adventure Sci-Fi"),
    ("Black Panther", "Action Adventure Sci-Fi"),
    ("Get Out", "Horror Mystery Thriller"),
    ("Mad Max: Fury Road", "Action Adventure Sci-Fi Thriller"),
    ("La La Land", "Comedy Drama Music Romance"),
    ("Moonlight", "Drama"),
    ("Arrival", "Drama Mystery Sci-Fi"),
    ("Baby Driver", "Action Crime Drama"),
    ("Dunkirk", "Action Drama History Thriller"),
];

const RATED_MOVIES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Inception",
    "Interstellar",
    "Parasite",
    "The Matrix",
    "Goodfellas",
    "The Departed",
];

// 0 marks an unrated movie
const USER_RATINGS: &[(&str, [i64; 10])] = &[
    ("User1", [5, 4, 0, 0, 5, 4, 0, 5, 0, 3]),
    ("User2", [0, 5, 4, 3, 0, 0, 5, 4, 5, 0]),
    ("User3", [4, 0, 5, 0, 4, 5, 0, 0, 4, 5]),
    ("User4", [3, 4, 0, 5, 0, 0, 4, 3, 0, 4]),
    ("User5", [0, 0, 4, 0, 5, 4, 5, 0, 3, 0]),
    (CURRENT_USER, [0; 10]),
];

/// Fifty well-known movies tagged with their genres
pub fn movie_catalog() -> Result<Catalog> {
    Catalog::new(
        MOVIES
            .iter()
            .map(|(title, genres)| Item::new(*title, *genres))
            .collect(),
    )
}

/// Ten movies rated by five users, plus an all-unrated [`CURRENT_USER`]
pub fn movie_ratings() -> Result<RatingMatrix> {
    let mut matrix = RatingMatrix::new(RATED_MOVIES.iter().copied())?;
    for (user, ratings) in USER_RATINGS {
        matrix.record_user_ratings(user, ratings)?;
    }
    Ok(matrix)
}
