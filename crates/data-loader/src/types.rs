//! Core domain types shared by every crate in the workspace.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - A fixed-shape struct instead of a `Vec<String>` so the attribute
//!   count is enforced by the compiler
//! - Owning container (DataIndex) that hands out references

use crate::attributes::AttributeTable;
use crate::graph::MovieGraph;
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a movie, exactly as it appears in the source files.
///
/// Comparison is exact: `"Alien"` and `"alien"` are different movies.
pub type MovieId = String;

// =============================================================================
// Movie Attributes
// =============================================================================

/// Categorical attributes of a movie, in positional order (genre, director, year).
///
/// The year is kept as text: it is only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieAttributes {
    pub genre: String,
    pub director: String,
    pub year: String,
}

impl MovieAttributes {
    /// Number of attribute positions compared during similarity scoring
    pub const ARITY: usize = 3;

    pub fn new(
        genre: impl Into<String>,
        director: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            director: director.into(),
            year: year.into(),
        }
    }

    /// Positional equality of each attribute against `other`
    ///
    /// Returns `[genre, director, year]` match flags.
    pub fn matches(&self, other: &MovieAttributes) -> [bool; Self::ARITY] {
        [
            self.genre == other.genre,
            self.director == other.director,
            self.year == other.year,
        ]
    }
}

// =============================================================================
// DataIndex - both stores, loaded once
// =============================================================================

/// Holds the graph store and the attribute table.
///
/// Built once by the loader and then shared read-only (usually behind an
/// `Arc`) with the recommendation engine.
#[derive(Debug, Default)]
pub struct DataIndex {
    pub(crate) graph: MovieGraph,
    pub(crate) attributes: AttributeTable,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an index from stores built elsewhere (tests, benchmarks)
    pub fn from_parts(graph: MovieGraph, attributes: AttributeTable) -> Self {
        Self { graph, attributes }
    }

    pub fn graph(&self) -> &MovieGraph {
        &self.graph
    }

    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    /// Get counts for reporting: (movies in graph, edges inserted, attribute entries)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.graph.len(),
            self.graph.edge_count(),
            self.attributes.len(),
        )
    }
}
