//! Error types for ranking sessions.
//!
//! None of these are retryable: every variant is a caller-contract violation,
//! not a transient condition. There is no I/O in this crate to retry.

use thiserror::Error;

/// Errors that can occur when driving a ranking session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// A comparison was submitted after the bounds already converged.
    #[error("Session is complete; no further comparisons are accepted")]
    SessionComplete,

    /// A result was requested before the bounds converged.
    #[error("Session is still open; a result is only available after convergence")]
    SessionIncomplete,

    /// Bounds escaped the peer list. Unreachable through the public API;
    /// indicates a hand-constructed or corrupted session value.
    #[error("Bounds [{left}, {right}) fall outside the peer list of length {len}")]
    BoundsOutOfRange {
        left: usize,
        right: usize,
        len: usize,
    },
}
