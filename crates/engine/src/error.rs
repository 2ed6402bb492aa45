//! Error types for the recommendation engine.

use data_loader::MovieId;
use thiserror::Error;

/// Reasons a recommendation query can fail
///
/// A seed or candidate without attributes is not an error: it only makes
/// the result shorter (possibly empty).
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The seed movie has no edges in the graph
    #[error("Movie not found in the graph: {0}")]
    NotFound(MovieId),

    /// The scoring stage failed
    #[error(transparent)]
    Scoring(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
