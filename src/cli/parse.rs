/// A `--rate ITEM=RATING` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingAssignment {
    pub item: String,
    pub rating: i64,
}

/// Parse `ITEM=RATING`; the range is validated by the rating matrix
///
/// Splits on the last `=` so titles may contain one.
pub fn parse_rating_assignment(s: &str) -> std::result::Result<RatingAssignment, String> {
    let (item, rating) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ITEM=RATING, got '{}'", s))?;

    let item = item.trim();
    if item.is_empty() {
        return Err(format!("missing item name in '{}'", s));
    }

    let rating = rating
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("rating must be an integer, got '{}'", rating.trim()))?;

    Ok(RatingAssignment {
        item: item.to_string(),
        rating,
    })
}
