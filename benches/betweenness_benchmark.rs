use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msbc::{BetweennessConfig, CsrGraph, MsBetweennessCentrality, Orientation};

fn sparse_graph(nodes: usize, degree: usize) -> CsrGraph {
    // Deterministic spread of targets.
    let mut edges = Vec::with_capacity(nodes * degree);
    for i in 0..nodes {
        for j in 1..=degree {
            edges.push((i, (i * 31 + j * 97) % nodes));
        }
    }
    CsrGraph::from_edges(nodes, &edges, Orientation::Undirected).expect("valid graph")
}

fn bench_batch_width(c: &mut Criterion) {
    let graph = sparse_graph(2_000, 4);
    let mut group = c.benchmark_group("betweenness_batch_width");
    group.sample_size(10);

    for width in [1usize, 8, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let config = BetweennessConfig::default()
                .with_undirected(true)
                .with_batch_width(width)
                .with_concurrency(1);
            b.iter(|| {
                let scores = MsBetweennessCentrality::new(&graph, config.clone())
                    .unwrap()
                    .compute()
                    .unwrap();
                black_box(scores.stats())
            });
        });
    }
    group.finish();
}

fn bench_concurrency(c: &mut Criterion) {
    let graph = sparse_graph(4_000, 4);
    let mut group = c.benchmark_group("betweenness_concurrency");
    group.sample_size(10);

    for threads in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let config = BetweennessConfig::default()
                .with_undirected(true)
                .with_concurrency(threads);
            b.iter(|| {
                let scores = MsBetweennessCentrality::new(&graph, config.clone())
                    .unwrap()
                    .compute()
                    .unwrap();
                black_box(scores.stats())
            });
        });
    }

    #[cfg(feature = "parallel")]
    group.bench_function("rayon", |b| {
        let config = BetweennessConfig::default().with_undirected(true);
        b.iter(|| {
            let scores = MsBetweennessCentrality::new(&graph, config.clone())
                .unwrap()
                .compute_rayon()
                .unwrap();
            black_box(scores.stats())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_batch_width, bench_concurrency);
criterion_main!(benches);
