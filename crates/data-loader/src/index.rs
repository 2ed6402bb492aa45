//! DataIndex loading logic.
//!
//! Loading never fails as a whole: a source that cannot be read is reported
//! back to the caller and its store is left empty, so the program can still
//! answer (or politely refuse) queries with whatever did load.
//!
//! Rust concepts you'll learn:
//! - `rayon::join` to read two files side by side
//! - Collecting recoverable errors instead of returning early with `?`

use crate::error::DataLoadError;
use crate::parser;
use crate::types::DataIndex;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default file name of the edge-list source
pub const DEFAULT_GRAPH_FILE: &str = "graph.txt";

/// Default file name of the attribute-list source
pub const DEFAULT_MOVIES_FILE: &str = "movies.txt";

/// Where to find the two source files
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub graph_path: PathBuf,
    pub attributes_path: PathBuf,
}

impl LoadConfig {
    pub fn new(graph_path: impl Into<PathBuf>, attributes_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
            attributes_path: attributes_path.into(),
        }
    }

    /// Default file names inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(
            data_dir.join(DEFAULT_GRAPH_FILE),
            data_dir.join(DEFAULT_MOVIES_FILE),
        )
    }
}

/// Result of a load: the index plus any sources that could not be read
#[derive(Debug)]
pub struct LoadReport {
    pub index: DataIndex,
    pub failures: Vec<DataLoadError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl DataIndex {
    /// Load the graph and movie data sources described by `config`
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert every edge (both directions) into the graph store
    /// 3. Insert every attribute entry (later entries overwrite earlier ones)
    /// 4. Report unreadable sources instead of failing
    pub fn load_from_files(config: &LoadConfig) -> LoadReport {
        info!(
            "Loading graph from {} and movie data from {}",
            config.graph_path.display(),
            config.attributes_path.display()
        );

        let (edges, entries) = rayon::join(
            || parser::parse_edge_file(&config.graph_path),
            || parser::parse_attribute_file(&config.attributes_path),
        );

        let mut index = DataIndex::new();
        let mut failures = Vec::new();

        match edges {
            Ok(edges) => {
                for (a, b) in &edges {
                    index.graph.add_edge(a, b);
                }
                info!("Graph loaded: {} edges", edges.len());
            }
            Err(e) => {
                warn!("{}", e);
                failures.push(e);
            }
        }

        match entries {
            Ok(entries) => {
                let count = entries.len();
                for (movie, attrs) in entries {
                    index.attributes.set_attributes(movie, attrs);
                }
                info!("Movie data loaded: {} records", count);
            }
            Err(e) => {
                warn!("{}", e);
                failures.push(e);
            }
        }

        LoadReport { index, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceKind;
    use std::fs;

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("graph.txt"), "A B\nB C\nA D\n").unwrap();
        fs::write(
            dir.path().join("movies.txt"),
            "A horror X 1990\nB horror X 1990\nC comedy Y 2000\nD horror Z 1990\n",
        )
        .unwrap();

        let report = DataIndex::load_from_files(&LoadConfig::in_dir(dir.path()));
        assert!(report.is_complete());

        let (movies, edges, attrs) = report.index.counts();
        assert_eq!(movies, 4);
        assert_eq!(edges, 3);
        assert_eq!(attrs, 4);
        assert_eq!(report.index.graph().neighbors_of("A"), ["B", "D"]);
    }

    #[test]
    fn test_missing_sources_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();

        let report = DataIndex::load_from_files(&LoadConfig::in_dir(dir.path()));
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0],
            DataLoadError::SourceUnavailable { kind: SourceKind::Graph, .. }
        ));
        assert!(matches!(
            report.failures[1],
            DataLoadError::SourceUnavailable { kind: SourceKind::Attributes, .. }
        ));
        assert_eq!(report.index.counts(), (0, 0, 0));
    }

    #[test]
    fn test_missing_attributes_keeps_graph() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("graph.txt"), "A B").unwrap();

        let report = DataIndex::load_from_files(&LoadConfig::in_dir(dir.path()));
        assert_eq!(report.failures.len(), 1);
        assert!(report.index.graph().contains("A"));
        assert!(report.index.attributes().is_empty());
    }
}
