#![forbid(unsafe_code)]

//! # rank-ladder
//!
//! Interactive pairwise-comparison ranking for inserting a new item into an
//! already-ordered list.
//!
//! Instead of asking a user to "rate this 1–10" (unreliable, miscalibrated),
//! rank-ladder asks pairwise questions: "is the new item better than this
//! one?" A sentiment-biased binary search over the existing ranking converges
//! in `O(log n)` comparisons to the item's insertion position, which is then
//! mapped to a bounded numeric score. The caller renders each comparison,
//! feeds the choice back, and persists the final position and rating; this
//! crate holds no I/O and no shared state.
//!
//! Every operation consumes an immutable session value and returns a new one,
//! so sessions can be cloned, serialized whole, and round-tripped across
//! requests without synchronization.

pub mod error;
pub mod evaluation;
pub mod rating;
pub mod report;
pub mod session;
pub mod stepper;

pub use error::RankingError;
pub use evaluation::{simulate_insertion, OracleRater, SimulationReport, SimulationSpec};
pub use rating::calculate_rating;
pub use report::{RankingProgress, RankingResult};
pub use session::{Choice, ComparisonRecord, RankingSession, Sentiment};
