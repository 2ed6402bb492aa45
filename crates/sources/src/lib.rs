//! # Sources Crate
//!
//! Candidate generation for movie recommendations.
//!
//! ## Components
//!
//! ### Graph Source
//! Breadth-first traversal of the movie co-occurrence graph:
//! - "Movies connected to the one you picked"
//! - Explores the full connected component of the seed movie
//! - Candidates come out in discovery order, which later breaks ties in ranking
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::GraphSource;
//! use data_loader::{DataIndex, LoadConfig};
//! use std::sync::Arc;
//!
//! let index = Arc::new(DataIndex::load_from_files(&LoadConfig::in_dir(".".as_ref())).index);
//! let source = GraphSource::new(index.clone());
//! let candidates = source.discover("Alien");
//! ```

// Public modules
pub mod types;
pub mod graph_source;

// Re-export commonly used types
pub use types::Candidate;
pub use graph_source::GraphSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let candidate = Candidate::new("Alien", 0, 1);
        assert_eq!(candidate.movie_id, "Alien");
        assert_eq!(candidate.discovery_rank, 0);
        assert_eq!(candidate.hops, 1);
    }
}
