//! Integration tests for the recommender.
//!
//! These tests load real source files from a temp directory and run
//! queries end to end, the way the CLI does.

use data_loader::{DataIndex, LoadConfig};
use engine::{RecommendError, RecommendationEngine};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_sources(graph: &str, movies: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("graph.txt"), graph).unwrap();
    fs::write(dir.path().join("movies.txt"), movies).unwrap();
    dir
}

fn engine_for(dir: &TempDir) -> RecommendationEngine {
    let report = DataIndex::load_from_files(&LoadConfig::in_dir(dir.path()));
    RecommendationEngine::new(Arc::new(report.index))
}

fn ids(engine: &RecommendationEngine, seed: &str) -> Vec<String> {
    engine
        .recommend(seed)
        .unwrap()
        .into_iter()
        .map(|r| r.movie_id)
        .collect()
}

const GRAPH: &str = "A B\nB C\nA D\n";
const MOVIES: &str = "\
A horror X 1990
B horror X 1990
C comedy Y 2000
D horror Z 1990
";

#[test]
fn test_end_to_end_scenario() {
    let dir = write_sources(GRAPH, MOVIES);
    let engine = engine_for(&dir);

    let recs = engine.recommend("A").unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].movie_id, "B");
    assert_eq!(recs[0].score, 1.0);
    assert_eq!(recs[1].movie_id, "D");
    assert!((recs[1].similarity_percent() - 66.666).abs() < 0.01);
    assert_eq!(recs[2].movie_id, "C");
    assert_eq!(recs[2].score, 0.0);
}

#[test]
fn test_seed_missing_from_graph() {
    let dir = write_sources(GRAPH, MOVIES);
    let engine = engine_for(&dir);

    assert!(matches!(engine.recommend("Z"), Err(RecommendError::NotFound(_))));
}

#[test]
fn test_seed_with_attributes_but_no_edges_is_not_found() {
    let dir = write_sources(GRAPH, "E drama W 2010\n");
    let engine = engine_for(&dir);

    assert!(matches!(engine.recommend("E"), Err(RecommendError::NotFound(_))));
}

#[test]
fn test_seed_without_attributes_gives_empty_result() {
    let dir = write_sources("A B\nA C\n", "B horror X 1990\nC horror X 1990\n");
    let engine = engine_for(&dir);

    assert!(engine.recommend("A").unwrap().is_empty());
}

#[test]
fn test_missing_movie_data_file_degrades() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("graph.txt"), GRAPH).unwrap();

    let report = DataIndex::load_from_files(&LoadConfig::in_dir(dir.path()));
    assert_eq!(report.failures.len(), 1);

    let engine = RecommendationEngine::new(Arc::new(report.index));
    assert!(engine.recommend("A").unwrap().is_empty());
}

#[test]
fn test_duplicate_edges_do_not_change_result() {
    let plain = write_sources(GRAPH, MOVIES);
    let doubled = write_sources("A B\nA B\nB C\nB A\nA D\nD D\n", MOVIES);

    assert_eq!(ids(&engine_for(&plain), "A"), ids(&engine_for(&doubled), "A"));
}

#[test]
fn test_candidates_without_attributes_are_skipped() {
    let dir = write_sources(
        "A B\nA C\nA D\nA E\n",
        "A horror X 1990\nC comedy Y 2000\nE horror X 2001\n",
    );
    let engine = engine_for(&dir);

    // B and D have no attributes
    assert_eq!(ids(&engine, "A"), ["E", "C"]);
}

#[test]
fn test_top_three_with_ties() {
    let dir = write_sources(
        "S P\nS Q\nS R\nS T\n",
        "\
S drama X 1990
P drama Y 2000
Q drama Y 2000
R drama X 1990
T drama Y 2000
",
    );
    let engine = engine_for(&dir);

    // R scores 1.0; P, Q and T all score 1/3 and keep discovery order
    assert_eq!(ids(&engine, "S"), ["R", "P", "Q"]);
}

#[test]
fn test_partial_trailing_record_is_ignored() {
    let dir = write_sources("A B\nA", "A horror X 1990\nB horror X 1990\nC comedy");
    let engine = engine_for(&dir);

    assert_eq!(ids(&engine, "A"), ["B"]);
    assert!(engine.data_index().attributes().attributes_of("C").is_none());
}

#[test]
fn test_recommendations_serialize_to_json() {
    let dir = write_sources(GRAPH, MOVIES);
    let engine = engine_for(&dir);

    let recs = engine.recommend("A").unwrap();
    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(json[0]["movie_id"], "B");
    assert_eq!(json[0]["score"], 1.0);
    assert_eq!(json[1]["matched"]["director"], false);
}
