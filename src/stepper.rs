//! Binary-search core: picking the next peer and narrowing the bounds.
//!
//! Each processed choice shrinks `[left, right)` to at most half its
//! previous size, so a session over `n` peers converges within
//! `ceil(log2(n)) + 2` comparisons (the `+2` covering the two allowed skips).

use tracing::{debug, warn};

use crate::error::RankingError;
use crate::session::{Choice, ComparisonRecord, RankingSession};

impl RankingSession {
    /// Midpoint of the current search interval.
    fn mid(&self) -> usize {
        (self.left + self.right) / 2
    }

    /// The peer to compare the target against next, or `None` once the
    /// bounds have converged. Pure; does not advance the session.
    pub fn next_comparison(&self) -> Option<&str> {
        if self.left >= self.right {
            return None;
        }
        self.ranked_list.get(self.mid()).map(String::as_str)
    }

    /// Applies one comparison choice and returns the narrowed session.
    ///
    /// `compared_id` is the peer the user actually saw (normally the one
    /// returned by [`next_comparison`](Self::next_comparison)); it is logged
    /// for undo and audit, not re-derived.
    ///
    /// A `Skip` narrows exactly like `PreferExisting` (toward the bottom
    /// half) in addition to consuming a skip. That bias is deliberate source
    /// behavior and is kept for output parity. A skip with no skips remaining
    /// is still accepted with the counter held at zero; disabling the action
    /// at that point is the UI's job.
    ///
    /// Errors with [`RankingError::SessionComplete`] once the bounds have
    /// converged.
    pub fn process_comparison(
        &self,
        compared_id: impl Into<String>,
        choice: Choice,
    ) -> Result<RankingSession, RankingError> {
        self.check_bounds()?;
        if self.complete {
            return Err(RankingError::SessionComplete);
        }

        let mid = self.mid();
        let mut next = self.clone();
        next.history.push(ComparisonRecord {
            choice,
            left_before: self.left,
            right_before: self.right,
            compared_id: compared_id.into(),
        });

        match choice {
            Choice::PreferNew => {
                next.right = mid;
            }
            Choice::PreferExisting => {
                next.left = mid + 1;
            }
            Choice::Skip => {
                if next.skips_remaining == 0 {
                    warn!(
                        target_id = %next.target_id,
                        "Skip requested with no skips remaining; narrowing anyway"
                    );
                }
                next.skips_remaining = next.skips_remaining.saturating_sub(1);
                next.left = mid + 1;
            }
        }

        next.complete = next.left >= next.right;
        debug!(
            target_id = %next.target_id,
            choice = ?choice,
            left = next.left,
            right = next.right,
            complete = next.complete,
            "Narrowed bounds"
        );
        next.assert_invariants();
        Ok(next)
    }
}
