use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fxhash::FxHashMap;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use wgraphs::{algo::*, prelude::*};

fn random_instance(n: Node, avg_deg: u32, seed: u64) -> (AdjArrayIn, FxHashMap<Edge, u32>) {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut weights = FxHashMap::default();
    for _ in 0..n * avg_deg {
        let e = Edge(rng.random_range(0..n), rng.random_range(0..n));
        weights.entry(e).or_insert_with(|| rng.random_range(1..100u32));
    }
    let graph = AdjArrayIn::from_edges(n, weights.keys().copied());
    (graph, weights)
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for n in [1_000, 10_000] {
        let (graph, weights) = random_instance(n, 5, 1);
        let w = |e: Edge| weights[&e];

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| black_box(Dijkstra::new(g, w).run(0)));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| black_box(BellmanFord::new(g, w).run(0)));
        });
        group.bench_with_input(BenchmarkId::new("spfa", n), &graph, |b, g| {
            b.iter(|| black_box(Spfa::new(g, w).run(0)));
        });
    }

    group.finish();
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pair");

    let n = 10_000;
    let (graph, weights) = random_instance(n, 5, 2);
    let w = |e: Edge| weights[&e];
    let target = n - 1;

    group.bench_function("dijkstra", |b| {
        b.iter(|| black_box(Dijkstra::new(&graph, w).path(0, target)));
    });
    group.bench_function("bidirectional", |b| {
        b.iter(|| black_box(BidirectionalDijkstra::new(&graph, w).path(0, target)));
    });
    group.bench_function("yen_k8", |b| {
        b.iter(|| black_box(Yen::new(&graph, w).run(0, target, 8)));
    });

    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);

    let (graph, weights) = random_instance(200, 4, 3);
    let w = |e: Edge| weights[&e];

    group.bench_function("johnson", |b| {
        b.iter(|| black_box(Johnson::new(&graph, w).run()));
    });
    group.bench_function("floyd_warshall", |b| {
        b.iter(|| black_box(FloydWarshall::new(&graph, w).run()));
    });

    group.finish();
}

criterion_group!(benches, bench_single_source, bench_single_pair, bench_all_pairs);
criterion_main!(benches);
