//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[source]` to keep the underlying I/O error attached
//! - Automatic `Display` and `Error` trait implementations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the graph and attribute sources
///
/// None of these are fatal for the program: the loader reports them and
/// carries on with whatever (possibly empty) data it managed to read.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Source file could not be opened or read
    #[error("Cannot open {kind} source: {}", .path.display())]
    SourceUnavailable {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which of the two input sources an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Graph,
    Attributes,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Graph => write!(f, "graph"),
            SourceKind::Attributes => write!(f, "movie data"),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
