//! Minimal end-to-end example for `rank-ladder`.
//!
//! Inserts a new restaurant into an already-ranked dinner list by answering
//! pairwise comparisons, then prints the final position and rating.
//!
//! To run: `cargo run --example quickstart`

use rank_ladder::{Choice, RankingSession, Sentiment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The existing ranking, best to worst. In a real host this comes from
    // storage; the list must already be sorted (that's the caller's contract).
    let ranked: Vec<String> = [
        "sushi-counter",
        "taqueria",
        "ramen-bar",
        "pizza-joint",
        "diner",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    // "Liked" biases the search toward the top half, so a strong new spot
    // needs fewer comparisons to land where it belongs.
    let mut session = RankingSession::new("new-bistro", "dinner", ranked, Sentiment::Liked);

    // Drive the loop. A UI would render each pair and wait for the user;
    // here we script the answers: better than ramen-bar, worse than
    // sushi-counter.
    while let Some(peer) = session.next_comparison().map(str::to_owned) {
        let progress = session.progress();
        println!(
            "comparison {}/{}: new-bistro vs {peer}",
            progress.current_comparison, progress.estimated_total
        );

        let choice = match peer.as_str() {
            "sushi-counter" => Choice::PreferExisting,
            _ => Choice::PreferNew,
        };
        session = session.process_comparison(peer, choice)?;
    }

    let result = session.result()?;
    println!(
        "-> position {} of {} ({}th percentile), rating {:.1} after {} comparisons",
        result.final_position,
        result.total_count,
        result.percentile,
        result.rating,
        result.comparisons_count
    );
    Ok(())
}
