//! Candidate types produced by candidate generation.

use data_loader::MovieId;
use serde::{Deserialize, Serialize};

/// A movie reachable from the seed, in the order BFS discovered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub movie_id: MovieId,
    /// Position in discovery order (0 = first movie found)
    pub discovery_rank: usize,
    /// Number of edges between the seed and this movie on a shortest path
    pub hops: usize,
}

impl Candidate {
    pub fn new(movie_id: impl Into<MovieId>, discovery_rank: usize, hops: usize) -> Self {
        Self {
            movie_id: movie_id.into(),
            discovery_rank,
            hops,
        }
    }
}
