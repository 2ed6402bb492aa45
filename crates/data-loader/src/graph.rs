//! Undirected co-occurrence graph between movies.
//!
//! Every edge is stored in both directions, so `neighbors_of(a)` and
//! `neighbors_of(b)` both see an `(a, b)` edge. Neighbor lists keep the
//! order edges were inserted in; BFS expansion depends on that order.

use crate::types::MovieId;
use std::collections::HashMap;

/// Adjacency lists keyed by movie id
#[derive(Debug, Clone, Default)]
pub struct MovieGraph {
    adjacency: HashMap<MovieId, Vec<MovieId>>,
    edges: usize,
}

impl MovieGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// Neither movie has to be known beforehand. Repeated edges are kept as
    /// duplicate neighbor entries. A self-loop puts the movie into its own
    /// list twice.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
        self.edges += 1;
    }

    /// Neighbors of `movie` in insertion order.
    ///
    /// Unknown movies have no neighbors; this is not an error at this layer.
    pub fn neighbors_of(&self, movie: &str) -> &[MovieId] {
        self.adjacency
            .get(movie)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// True iff `movie` has at least one recorded edge
    pub fn contains(&self, movie: &str) -> bool {
        self.adjacency.contains_key(movie)
    }

    /// Number of distinct movies with at least one edge
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of `add_edge` calls, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// All movies in the graph, in no particular order
    pub fn movies(&self) -> impl Iterator<Item = &MovieId> {
        self.adjacency.keys()
    }
}
