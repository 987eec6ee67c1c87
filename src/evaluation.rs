//! Offline evaluation harness for the ranking stepper.
//!
//! Drives a real session loop with a deterministic oracle standing in for
//! the user, optionally injecting seeded random skips. Useful for checking
//! convergence behavior and comparison counts without a UI in the loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::report::RankingResult;
use crate::session::{Choice, RankingSession, Sentiment, MAX_SKIPS};

/// Simulated user that knows where the target truly belongs.
#[derive(Debug, Clone, Copy)]
pub struct OracleRater {
    /// The target's true insertion index among the peers (0 = best, may be
    /// `peer_count` for worst).
    pub true_position: usize,
}

impl OracleRater {
    pub fn new(true_position: usize) -> Self {
        Self { true_position }
    }

    /// Answer for a comparison against the peer at index `mid`.
    pub fn choose(&self, mid: usize) -> Choice {
        if self.true_position <= mid {
            Choice::PreferNew
        } else {
            Choice::PreferExisting
        }
    }
}

/// One synthetic insertion scenario.
#[derive(Debug, Clone)]
pub struct SimulationSpec {
    pub peer_count: usize,
    pub true_position: usize,
    pub sentiment: Sentiment,
    /// Probability of skipping any given comparison while skips remain.
    pub skip_rate: f64,
    pub seed: u64,
}

/// Outcome of one simulated session.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Position the search converged to. Can differ from the spec's true
    /// position when the sentiment window excluded it or skips pushed the
    /// search past it.
    pub final_position: usize,
    pub comparisons: usize,
    pub skips_used: u8,
    pub result: RankingResult,
}

/// Runs one scripted session to completion and reports how it converged.
pub fn simulate_insertion(spec: &SimulationSpec) -> SimulationReport {
    let peers: Vec<String> = (0..spec.peer_count).map(|i| format!("peer-{i}")).collect();
    let oracle = OracleRater::new(spec.true_position.min(spec.peer_count));
    let skip_rate = spec.skip_rate.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let mut session = RankingSession::new("target", "simulated", peers, spec.sentiment);
    while let Some(peer) = session.next_comparison().map(str::to_owned) {
        let (left, right) = session.bounds();
        let mid = (left + right) / 2;
        let choice = if session.skips_remaining() > 0 && rng.gen_bool(skip_rate) {
            Choice::Skip
        } else {
            oracle.choose(mid)
        };
        session = session
            .process_comparison(peer, choice)
            .expect("open session accepts comparisons");
    }

    let result = session.result().expect("converged session has a result");
    SimulationReport {
        final_position: result.final_position,
        comparisons: result.comparisons_count,
        skips_used: MAX_SKIPS - session.skips_remaining(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_recovers_position_inside_sentiment_window() {
        // Fine window over 10 peers is [3, 7); positions 3..=6 are reachable.
        for true_position in 3..7 {
            let report = simulate_insertion(&SimulationSpec {
                peer_count: 10,
                true_position,
                sentiment: Sentiment::Fine,
                skip_rate: 0.0,
                seed: 7,
            });
            assert_eq!(report.final_position, true_position);
        }
    }

    #[test]
    fn comparisons_stay_within_log_bound_with_skips() {
        let bound = |n: usize| (n.max(1) as f64).log2().ceil() as usize + 2;
        for seed in 0..16 {
            let report = simulate_insertion(&SimulationSpec {
                peer_count: 100,
                true_position: 42,
                sentiment: Sentiment::Liked,
                skip_rate: 0.3,
                seed,
            });
            assert!(report.comparisons <= bound(100));
            assert!(report.skips_used <= MAX_SKIPS);
        }
    }
}
