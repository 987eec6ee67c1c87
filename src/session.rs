//! Ranking session state: creation, bounds, and the undo log.
//!
//! A [`RankingSession`] is a plain immutable value. Transitions never mutate
//! in place; they return a fresh session, so callers can keep, clone, or
//! serialize any intermediate state. Persistence layers must swap the whole
//! value: partial field updates observed mid-transition are never valid.

use serde::{Deserialize, Serialize};

use crate::error::RankingError;

/// Maximum number of skips a session starts with.
pub const MAX_SKIPS: u8 = 2;

/// Coarse initial hint about the new item, used only to bias the starting
/// search interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Start the search in the top half of the list.
    Liked,
    /// Start the search in the middle 30-70% band.
    Fine,
    /// Start the search in the bottom half of the list.
    Disliked,
}

/// A user's answer to one rendered comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// The new item ranks above the compared peer.
    PreferNew,
    /// The compared peer ranks above the new item.
    PreferExisting,
    /// No genuine preference; advance the search anyway (limited uses).
    Skip,
}

/// One entry in the comparison log. Stores the pre-narrowing bounds so the
/// step can be undone exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub choice: Choice,
    pub left_before: usize,
    pub right_before: usize,
    pub compared_id: String,
}

/// State of one in-flight ranking session.
///
/// The session inserts `target_id` into `ranked_list` (peer ids, sorted
/// best-to-worst; sortedness is a caller precondition and is not verified).
/// The half-open interval `[left, right)` is the index range still under
/// consideration for the insertion position; the session is complete once it
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSession {
    pub(crate) target_id: String,
    pub(crate) category: String,
    pub(crate) sentiment: Sentiment,
    pub(crate) ranked_list: Vec<String>,
    pub(crate) history: Vec<ComparisonRecord>,
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) skips_remaining: u8,
    pub(crate) complete: bool,
}

/// Initial `[left, right)` interval for a list of length `n`.
///
/// Floating-point math matches the original calibration: `floor(0.3 n)` and
/// `ceil(0.7 n)` for the middle band.
fn initial_bounds(sentiment: Sentiment, n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    match sentiment {
        Sentiment::Liked => (0, n.div_ceil(2)),
        Sentiment::Fine => (
            (n as f64 * 0.3).floor() as usize,
            (n as f64 * 0.7).ceil() as usize,
        ),
        Sentiment::Disliked => (n / 2, n),
    }
}

impl RankingSession {
    /// Creates a ranking session for inserting `target_id` into
    /// `ranked_list` (one category, sorted best-to-worst).
    ///
    /// An empty peer list collapses the bounds to `[0, 0)`: the session is
    /// immediately complete and the new item takes position 0.
    pub fn new(
        target_id: impl Into<String>,
        category: impl Into<String>,
        ranked_list: Vec<String>,
        sentiment: Sentiment,
    ) -> Self {
        let n = ranked_list.len();
        let (left, right) = initial_bounds(sentiment, n);
        Self {
            target_id: target_id.into(),
            category: category.into(),
            sentiment,
            ranked_list,
            history: Vec::new(),
            left,
            right,
            skips_remaining: MAX_SKIPS,
            complete: left >= right,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn ranked_list(&self) -> &[String] {
        &self.ranked_list
    }

    pub fn history(&self) -> &[ComparisonRecord] {
        &self.history
    }

    /// Current half-open search interval `[left, right)`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    pub fn skips_remaining(&self) -> u8 {
        self.skips_remaining
    }

    /// True once the bounds have converged and a result can be generated.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Reverts the most recent comparison. A no-op on an empty history.
    ///
    /// Restores the bounds recorded before that comparison, refunds one skip
    /// (capped at [`MAX_SKIPS`]) if the undone choice was a skip, and reopens
    /// the session even if it had just completed.
    pub fn undo_last_comparison(&self) -> RankingSession {
        let mut next = self.clone();
        let Some(record) = next.history.pop() else {
            return next;
        };

        next.left = record.left_before;
        next.right = record.right_before;
        next.complete = false;
        if record.choice == Choice::Skip {
            next.skips_remaining = (next.skips_remaining + 1).min(MAX_SKIPS);
        }
        next.assert_invariants();
        next
    }

    /// Defensive boundary check: bounds inside the peer list.
    ///
    /// Unreachable through `new` and the transition methods, but a session
    /// deserialized from an untrusted source can violate it.
    pub(crate) fn check_bounds(&self) -> Result<(), RankingError> {
        let len = self.ranked_list.len();
        if self.left > self.right || self.right > len {
            return Err(RankingError::BoundsOutOfRange {
                left: self.left,
                right: self.right,
                len,
            });
        }
        Ok(())
    }

    pub(crate) fn assert_invariants(&self) {
        debug_assert!(self.left <= self.right);
        debug_assert!(self.right <= self.ranked_list.len());
        debug_assert_eq!(self.complete, self.left >= self.right);
        debug_assert!(self.skips_remaining <= MAX_SKIPS);
    }
}
