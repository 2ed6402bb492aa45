//! # Data Loader Crate
//!
//! This crate loads and holds the two data sources behind the recommender:
//! the movie co-occurrence graph and the per-movie attribute table.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieId, MovieAttributes, DataIndex)
//! - **graph**: Undirected adjacency store (MovieGraph)
//! - **attributes**: Attribute store (AttributeTable)
//! - **parser**: Tokenize the two whitespace-separated source files
//! - **index**: Build a DataIndex from files, tolerating missing sources
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataIndex, LoadConfig};
//! use std::path::Path;
//!
//! let report = DataIndex::load_from_files(&LoadConfig::in_dir(Path::new(".")));
//! for failure in &report.failures {
//!     eprintln!("{failure}");
//! }
//!
//! let index = report.index;
//! println!("Alien has {} neighbors", index.graph().neighbors_of("Alien").len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod graph;
pub mod attributes;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result, SourceKind};
pub use types::{DataIndex, MovieAttributes, MovieId};
pub use graph::MovieGraph;
pub use attributes::AttributeTable;
pub use index::{LoadConfig, LoadReport, DEFAULT_GRAPH_FILE, DEFAULT_MOVIES_FILE};
