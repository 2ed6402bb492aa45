//! Core traits for the scoring stage.
//!
//! This module defines the Scorer trait so the engine can be handed any
//! similarity measure that turns candidates into scored candidates.

use crate::types::ScoredCandidate;
use anyhow::Result;
use sources::Candidate;

/// Core trait for scoring candidates against a seed movie.
///
/// ## Design Note
/// - `Send + Sync` allows scorers to be shared across threads with the engine
/// - Scorers take ownership of the candidates and may drop the ones they
///   cannot score; the output keeps the input order
pub trait Scorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Score `candidates` against `seed`.
    ///
    /// # Returns
    /// * `Ok(Vec<ScoredCandidate>)` - Scored candidates, in input order
    /// * `Err` - If scoring fails
    fn score(&self, seed: &str, candidates: Vec<Candidate>) -> Result<Vec<ScoredCandidate>>;
}
