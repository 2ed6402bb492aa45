//! # Recommendation Engine
//!
//! This module coordinates the hybrid recommendation pipeline:
//! 1. Check the seed is in the graph
//! 2. Discover candidates by BFS over the graph (GraphSource)
//! 3. Score candidates by attribute overlap (Scorer)
//! 4. Rank by score, stable on ties, and keep the top N
//!
//! Queries only read the shared DataIndex, so one engine can be cloned and
//! used from several places at once.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use data_loader::{DataIndex, MovieId};
use pipeline::{rank, AttributeOverlapScorer, MatchBreakdown, ScoredCandidate, Scorer};
use sources::GraphSource;

use crate::error::{RecommendError, Result};

/// Number of recommendations returned by `recommend`
pub const DEFAULT_TOP_N: usize = 3;

/// A single recommended movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    /// Similarity to the seed in [0.0, 1.0]
    pub score: f64,
    /// Graph distance from the seed
    pub hops: usize,
    pub matched: MatchBreakdown,
}

impl Recommendation {
    /// Similarity as a percentage (score × 100)
    pub fn similarity_percent(&self) -> f64 {
        self.score * 100.0
    }
}

impl From<ScoredCandidate> for Recommendation {
    fn from(scored: ScoredCandidate) -> Self {
        Self {
            movie_id: scored.candidate.movie_id,
            score: scored.score,
            hops: scored.candidate.hops,
            matched: scored.matched,
        }
    }
}

/// Graph-traversal + attribute-similarity recommender
#[derive(Clone)]
pub struct RecommendationEngine {
    data_index: Arc<DataIndex>,
    source: GraphSource,
    scorer: Arc<dyn Scorer>,
}

impl RecommendationEngine {
    /// Create an engine over a loaded index, scoring by attribute overlap
    pub fn new(data_index: Arc<DataIndex>) -> Self {
        let source = GraphSource::new(data_index.clone());
        let scorer = Arc::new(AttributeOverlapScorer::new(data_index.clone()));
        Self {
            data_index,
            source,
            scorer,
        }
    }

    /// Replace the similarity measure (builder pattern)
    pub fn with_scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    pub fn data_index(&self) -> &DataIndex {
        &self.data_index
    }

    /// Top `DEFAULT_TOP_N` recommendations for `seed`
    pub fn recommend(&self, seed: &str) -> Result<Vec<Recommendation>> {
        self.recommend_top(seed, DEFAULT_TOP_N)
    }

    /// At most `top_n` recommendations for `seed`, best first
    ///
    /// # Errors
    /// `RecommendError::NotFound` if `seed` has no edges in the graph. A
    /// seed that is in the graph but has no attributes gives an empty list.
    pub fn recommend_top(&self, seed: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        if !self.data_index.graph().contains(seed) {
            return Err(RecommendError::NotFound(seed.to_string()));
        }

        let start_time = Instant::now();

        let candidates = self.source.discover(seed);
        let candidate_count = candidates.len();

        let scored = self.scorer.score(seed, candidates)?;
        debug!(
            "{} scored {} of {} candidates",
            self.scorer.name(),
            scored.len(),
            candidate_count
        );

        let recommendations: Vec<Recommendation> = rank(scored, top_n)
            .into_iter()
            .map(Recommendation::from)
            .collect();

        info!(
            "Selected {} recommendations for {} from {} candidates in {:.2?}",
            recommendations.len(),
            seed,
            candidate_count,
            start_time.elapsed()
        );
        Ok(recommendations)
    }
}
