//! Graph Source - candidate discovery by breadth-first traversal
//!
//! ## Algorithm
//! 1. Mark the seed visited and enqueue it
//! 2. Pop the front of the queue
//! 3. Walk its neighbors in stored order; every neighbor not seen yet is
//!    recorded as a candidate, marked visited and enqueued
//! 4. Repeat until the queue is empty
//!
//! The whole connected component of the seed is explored: there is no depth
//! limit and no cap on the number of candidates. The seed itself is never a
//! candidate.
//!
//! ## Learning Goals
//! - VecDeque as a FIFO queue
//! - HashSet of borrowed `&str` so the traversal never clones ids it skips

use crate::types::Candidate;
use data_loader::DataIndex;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Generates candidates from the movie co-occurrence graph
#[derive(Clone)]
pub struct GraphSource {
    /// Shared reference to the data index (read-only, so no Mutex needed)
    data_index: Arc<DataIndex>,
}

impl GraphSource {
    pub fn new(data_index: Arc<DataIndex>) -> Self {
        Self { data_index }
    }

    /// Every movie reachable from `seed`, in BFS discovery order.
    ///
    /// An unknown seed simply yields no candidates; callers that need a
    /// strict membership check do it before calling this.
    #[instrument(skip(self))]
    pub fn discover(&self, seed: &str) -> Vec<Candidate> {
        let graph = self.data_index.graph();

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        let mut candidates = Vec::new();

        visited.insert(seed);
        queue.push_back((seed, 0));

        while let Some((current, depth)) = queue.pop_front() {
            for neighbor in graph.neighbors_of(current) {
                if visited.insert(neighbor.as_str()) {
                    candidates.push(Candidate::new(
                        neighbor.clone(),
                        candidates.len(),
                        depth + 1,
                    ));
                    queue.push_back((neighbor.as_str(), depth + 1));
                }
            }
        }

        debug!("Discovered {} candidates from {}", candidates.len(), seed);
        candidates
    }
}
