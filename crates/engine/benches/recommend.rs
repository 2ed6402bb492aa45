//! Benchmarks for recommendation queries
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic graph so no data files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{AttributeTable, DataIndex, MovieAttributes, MovieGraph};
use engine::RecommendationEngine;
use sources::GraphSource;
use std::sync::Arc;

const GENRES: [&str; 5] = ["action", "comedy", "drama", "horror", "scifi"];

/// A ring of `n` movies with a chord every 7 steps, all with attributes
fn build_index(n: usize) -> Arc<DataIndex> {
    let mut graph = MovieGraph::new();
    let mut attributes = AttributeTable::new();

    for i in 0..n {
        let id = format!("movie{i}");
        graph.add_edge(&id, &format!("movie{}", (i + 1) % n));
        graph.add_edge(&id, &format!("movie{}", (i + 7) % n));
        attributes.set_attributes(
            id,
            MovieAttributes::new(
                GENRES[i % GENRES.len()],
                format!("director{}", i % 40),
                (1970 + i % 50).to_string(),
            ),
        );
    }

    Arc::new(DataIndex::from_parts(graph, attributes))
}

fn bench_discover(c: &mut Criterion) {
    let index = build_index(10_000);
    let source = GraphSource::new(index.clone());

    c.bench_function("graph_source_discover", |b| {
        b.iter(|| black_box(source.discover(black_box("movie0"))))
    });
}

fn bench_recommend(c: &mut Criterion) {
    let index = build_index(10_000);
    let engine = RecommendationEngine::new(index);

    c.bench_function("recommend_top3", |b| {
        b.iter(|| black_box(engine.recommend(black_box("movie0")).unwrap()))
    });
}

criterion_group!(benches, bench_discover, bench_recommend);
criterion_main!(benches);
