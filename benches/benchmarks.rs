//! Criterion benchmarks for kiwirail.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};

use kiwirail::engine::{QueryEngine, CANONICAL_GRAPH};
use kiwirail::format::GraphReader;
use kiwirail::graph::{GraphBuilder, RailGraph};

/// Build a random network with `town_count` towns and roughly
/// `edges_per_town` outgoing routes each.
fn make_large_graph(town_count: usize, edges_per_town: usize) -> RailGraph {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let label = |i: usize| format!("T{}", i);

    let mut builder = GraphBuilder::new();
    for i in 0..town_count {
        builder.add_town(label(i));
        let mut targets: Vec<usize> = (0..edges_per_town)
            .map(|_| rng.gen_range(0..town_count))
            .filter(|&t| t != i)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        for t in targets {
            builder.link(label(i), label(t), rng.gen_range(1..100));
        }
    }
    builder.build().unwrap()
}

fn bench_parse_and_build(c: &mut Criterion) {
    c.bench_function("parse_canonical_graph", |b| {
        b.iter(|| GraphReader::parse(CANONICAL_GRAPH).unwrap());
    });
    c.bench_function("build_graph_1k_towns", |b| {
        b.iter(|| make_large_graph(1_000, 4));
    });
}

fn bench_distance(c: &mut Criterion) {
    let graph = GraphReader::parse(CANONICAL_GRAPH).unwrap();
    let engine = QueryEngine::new();
    c.bench_function("distance_aebcd", |b| {
        b.iter(|| engine.distance(&graph, &["A", "E", "B", "C", "D"]));
    });
}

fn bench_stop_counts(c: &mut Criterion) {
    let graph = GraphReader::parse(CANONICAL_GRAPH).unwrap();
    let engine = QueryEngine::new();
    c.bench_function("count_max_stops_c_c_10", |b| {
        b.iter(|| engine.count_walks_max_stops(&graph, "C", "C", 10));
    });
    c.bench_function("count_exact_stops_a_c_10", |b| {
        b.iter(|| engine.count_walks_exact_stops(&graph, "A", "C", 10));
    });
}

fn bench_distance_below(c: &mut Criterion) {
    let graph = GraphReader::parse(CANONICAL_GRAPH).unwrap();
    let engine = QueryEngine::new();
    c.bench_function("count_distance_below_c_c_100", |b| {
        b.iter(|| engine.count_walks_distance_lt(&graph, "C", "C", 100));
    });
}

fn bench_shortest(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 5);
    let engine = QueryEngine::new();
    c.bench_function("shortest_10k_towns", |b| {
        b.iter(|| engine.shortest_distance(&graph, "T0", "T9999"));
    });
}

criterion_group!(
    benches,
    bench_parse_and_build,
    bench_distance,
    bench_stop_counts,
    bench_distance_below,
    bench_shortest,
);
criterion_main!(benches);
