//! Parser for the two whitespace-separated source files.
//!
//! - graph file: `movie movie` pairs, one edge per two tokens
//! - movie data file: `movie genre director year` tuples, one entry per four tokens
//!
//! Line breaks carry no meaning; both files are just token streams read
//! until they run out. A short trailing record (fewer tokens than a full
//! pair/tuple) marks the end of input and is dropped.
//!
//! Rust concepts you'll learn here:
//! - `split_whitespace` for tokenizing
//! - `chunks_exact` and its `remainder`
//! - Mapping an `io::Error` into a domain error with context

use crate::error::{DataLoadError, Result, SourceKind};
use crate::types::{MovieAttributes, MovieId};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a source file into a String.
///
/// Bytes are decoded as UTF-8; files that are not valid UTF-8 are decoded
/// as ISO-8859-1 (Latin-1), where each byte maps directly to a code point.
pub fn read_source(path: &Path, kind: SourceKind) -> Result<String> {
    let unavailable = |source| DataLoadError::SourceUnavailable {
        kind,
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unavailable)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(unavailable)?;

    Ok(match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

/// Split edge-list text into `(a, b)` pairs
pub fn parse_edges(content: &str) -> Vec<(MovieId, MovieId)> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let pairs = tokens.chunks_exact(2);

    if !pairs.remainder().is_empty() {
        debug!("Ignoring dangling token at end of graph source: {:?}", pairs.remainder());
    }

    pairs
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}

/// Split attribute-list text into `(movie, attributes)` entries
pub fn parse_attributes(content: &str) -> Vec<(MovieId, MovieAttributes)> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let tuples = tokens.chunks_exact(1 + MovieAttributes::ARITY);

    if !tuples.remainder().is_empty() {
        debug!(
            "Ignoring partial record at end of movie data source: {:?}",
            tuples.remainder()
        );
    }

    tuples
        .map(|t| (t[0].to_string(), MovieAttributes::new(t[1], t[2], t[3])))
        .collect()
}

/// Read and parse the graph file
pub fn parse_edge_file(path: &Path) -> Result<Vec<(MovieId, MovieId)>> {
    let content = read_source(path, SourceKind::Graph)?;
    Ok(parse_edges(&content))
}

/// Read and parse the movie data file
pub fn parse_attribute_file(path: &Path) -> Result<Vec<(MovieId, MovieAttributes)>> {
    let content = read_source(path, SourceKind::Attributes)?;
    Ok(parse_attributes(&content))
}
