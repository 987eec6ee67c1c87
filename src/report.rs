//! Terminal result construction and UI progress estimation.

use serde::{Deserialize, Serialize};

use crate::error::RankingError;
use crate::rating::calculate_rating;
use crate::session::RankingSession;

/// Final outcome of a converged ranking session.
///
/// The caller is responsible for inserting the target item into the stored
/// peer list at `final_position` and persisting `rating`; this crate performs
/// no write-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub target_id: String,
    pub category: String,
    /// Insertion index into the (pre-insertion) peer list, 0 = best.
    pub final_position: usize,
    /// List size including the newly inserted item.
    pub total_count: usize,
    /// Calibrated score in the 5.0-10.0 band, one decimal place.
    pub rating: f64,
    /// Rank as a percentage of `total_count`, where 100 is best.
    pub percentile: u32,
    /// Number of comparisons the user answered (skips included).
    pub comparisons_count: usize,
}

/// Presentation-only progress estimate for an in-flight session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingProgress {
    /// 1-based ordinal of the comparison currently on screen.
    pub current_comparison: usize,
    /// Estimated total comparisons for the whole session.
    pub estimated_total: usize,
    /// Rounded completion percentage.
    pub percent_complete: u32,
}

impl RankingSession {
    /// Builds the final [`RankingResult`] once the bounds have converged.
    ///
    /// Errors with [`RankingError::SessionIncomplete`] while the session is
    /// still open.
    pub fn result(&self) -> Result<RankingResult, RankingError> {
        self.check_bounds()?;
        if !self.complete {
            return Err(RankingError::SessionIncomplete);
        }

        let existing = self.ranked_list.len();
        let final_position = self.bounds().0;
        let total_count = existing + 1;
        let percentile =
            (((total_count - final_position) as f64 / total_count as f64) * 100.0).round() as u32;

        Ok(RankingResult {
            target_id: self.target_id.clone(),
            category: self.category.clone(),
            final_position,
            total_count,
            rating: calculate_rating(final_position, existing),
            percentile,
            comparisons_count: self.history.len(),
        })
    }

    /// Estimates how far along the session is, for progress UI.
    ///
    /// Never panics on degenerate sessions: an empty search range estimates
    /// zero remaining comparisons and the total is floored at one past the
    /// current history length.
    pub fn progress(&self) -> RankingProgress {
        let (left, right) = self.bounds();
        let range = right.saturating_sub(left);
        let estimated_remaining = if range > 0 {
            (range as f64).log2().ceil() as usize
        } else {
            0
        };

        let answered = self.history.len();
        let estimated_total = (answered + estimated_remaining).max(answered + 1);
        let percent_complete = if estimated_total > 0 {
            ((answered as f64 / estimated_total as f64) * 100.0).round() as u32
        } else {
            100
        };

        RankingProgress {
            current_comparison: answered + 1,
            estimated_total,
            percent_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Choice, Sentiment};

    fn peers(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("peer-{i}")).collect()
    }

    #[test]
    fn result_requires_convergence() {
        let s = RankingSession::new("t", "dinner", peers(10), Sentiment::Fine);
        assert_eq!(s.result(), Err(RankingError::SessionIncomplete));
    }

    #[test]
    fn empty_list_yields_default_result() {
        let s = RankingSession::new("t", "dinner", Vec::new(), Sentiment::Disliked);
        let result = s.result().unwrap();
        assert_eq!(result.final_position, 0);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.rating, 7.5);
        assert_eq!(result.percentile, 100);
        assert_eq!(result.comparisons_count, 0);
    }

    #[test]
    fn progress_on_fresh_session_estimates_log2_of_range() {
        let s = RankingSession::new("t", "dinner", peers(10), Sentiment::Fine);
        // Range 4 -> 2 estimated comparisons remain.
        let p = s.progress();
        assert_eq!(p.current_comparison, 1);
        assert_eq!(p.estimated_total, 2);
        assert_eq!(p.percent_complete, 0);
    }

    #[test]
    fn progress_after_convergence_reports_floored_total() {
        let s = RankingSession::new("t", "dinner", peers(2), Sentiment::Liked);
        // Bounds [0, 1): one comparison settles it.
        let s = s.process_comparison("peer-0", Choice::PreferNew).unwrap();
        assert!(s.is_complete());
        let p = s.progress();
        assert_eq!(p.estimated_total, 2);
        assert_eq!(p.percent_complete, 50);
    }

    #[test]
    fn progress_on_empty_session_never_divides_by_zero() {
        let s = RankingSession::new("t", "dinner", Vec::new(), Sentiment::Fine);
        let p = s.progress();
        assert_eq!(p.current_comparison, 1);
        assert_eq!(p.estimated_total, 1);
        assert_eq!(p.percent_complete, 0);
    }
}
