//! Pipeline for scoring and ranking movie candidates.
//!
//! This crate provides:
//! - Scorer trait for similarity measures
//! - AttributeOverlapScorer, the exact-match attribute similarity
//! - `rank` for ordering and truncating scored candidates
//!
//! ## Architecture
//! Candidates from the graph source go through two stages:
//! 1. A Scorer assigns each candidate a similarity to the seed (and may drop
//!    candidates it cannot score)
//! 2. `rank` sorts by similarity, stable on ties, and keeps the top N
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, AttributeOverlapScorer, Scorer};
//!
//! let scorer = AttributeOverlapScorer::new(index.clone());
//! let scored = scorer.score("Alien", candidates)?;
//! let top = rank(scored, 3);
//! ```

pub mod traits;
pub mod types;
pub mod similarity;
pub mod ranking;

// Re-export main types
pub use traits::Scorer;
pub use types::{MatchBreakdown, ScoredCandidate};
pub use similarity::{similarity, AttributeOverlapScorer};
pub use ranking::rank;
