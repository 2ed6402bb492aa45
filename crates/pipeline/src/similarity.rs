//! Attribute-overlap similarity between the seed and each candidate.
//!
//! Similarity is the fraction of attribute positions (genre, director, year)
//! whose values are exactly equal. Each position weighs the same, so with
//! three attributes the only possible scores are 0, 1/3, 2/3 and 1.

use crate::traits::Scorer;
use crate::types::{MatchBreakdown, ScoredCandidate};
use anyhow::Result;
use data_loader::{DataIndex, MovieAttributes};
use sources::Candidate;
use std::sync::Arc;
use tracing::debug;

/// Scores candidates by exact positional attribute matches.
///
/// ## Algorithm
/// 1. Look up the seed's attributes; without them nothing can be scored
/// 2. For each candidate with attributes, count matching positions
/// 3. Divide by the number of positions
///
/// Candidates without attributes are left out rather than scored as zero.
pub struct AttributeOverlapScorer {
    data_index: Arc<DataIndex>,
}

impl AttributeOverlapScorer {
    pub fn new(data_index: Arc<DataIndex>) -> Self {
        Self { data_index }
    }
}

/// Fraction of matching positions between two attribute sets
pub fn similarity(seed: &MovieAttributes, candidate: &MovieAttributes) -> f64 {
    MatchBreakdown::between(seed, candidate).ratio()
}

impl Scorer for AttributeOverlapScorer {
    fn name(&self) -> &str {
        "AttributeOverlapScorer"
    }

    fn score(&self, seed: &str, candidates: Vec<Candidate>) -> Result<Vec<ScoredCandidate>> {
        let attributes = self.data_index.attributes();

        let Some(seed_attrs) = attributes.attributes_of(seed) else {
            debug!("Seed {} has no attributes; nothing to score", seed);
            return Ok(Vec::new());
        };

        let total = candidates.len();
        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let attrs = attributes.attributes_of(&candidate.movie_id)?;
                let matched = MatchBreakdown::between(seed_attrs, attrs);
                Some(ScoredCandidate {
                    score: matched.ratio(),
                    candidate,
                    matched,
                })
            })
            .collect();

        debug!(
            "Scored {} of {} candidates ({} without attributes)",
            scored.len(),
            total,
            total - scored.len()
        );
        Ok(scored)
    }
}
