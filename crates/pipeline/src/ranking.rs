//! Ranking of scored candidates.

use crate::types::ScoredCandidate;

/// Sort by score (highest first) and keep at most `top_n` entries.
///
/// The sort is stable and keyed only on the score, so candidates with equal
/// scores stay in the order they were discovered.
pub fn rank(mut scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    scored
}
