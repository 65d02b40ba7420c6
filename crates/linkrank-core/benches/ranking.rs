//! PageRank performance benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Random surfer sampling
//! - Fixed-point iteration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linkrank_core::{
    iterate_pagerank, sample_pagerank, transition_model, LinkGraph, RankConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Ring of pages where every page also links a few pages ahead; every
/// tenth page is dangling.
fn generate_graph(pages: usize) -> LinkGraph {
    LinkGraph::from_links((0..pages).map(|i| {
        let links: Vec<String> = if i % 10 == 9 {
            Vec::new()
        } else {
            [1, 3, 7]
                .iter()
                .map(|step| format!("page{:05}.html", (i + step) % pages))
                .collect()
        };
        (format!("page{:05}.html", i), links)
    }))
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_model");

    for pages in [10, 100, 1_000] {
        let graph = generate_graph(pages);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| transition_model(black_box(graph), "page00000.html", 0.85));
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pagerank");
    let config = RankConfig::default();

    for pages in [10, 100] {
        let graph = generate_graph(pages);
        group.throughput(Throughput::Elements(config.samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                sample_pagerank(black_box(graph), &config, &mut rng)
            });
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");
    let config = RankConfig::default();

    for pages in [10, 100, 1_000, 10_000] {
        let graph = generate_graph(pages);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| iterate_pagerank(black_box(graph), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
