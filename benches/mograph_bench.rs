//! Criterion benchmarks for u-mograph algorithms.
//!
//! Uses seeded random instances so that runs are comparable across
//! machines and commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_mograph::generate::{random_graph, InstanceConfig};
use u_mograph::graph::{Directed, NodeId, Undirected};
use u_mograph::measure::NoopSink;
use u_mograph::namoa::{NamoaConfig, NamoaRunner};
use u_mograph::shortest::{DijkstraConfig, DijkstraRunner};
use u_mograph::spanning::{KruskalConfig, KruskalRunner, PrimConfig, PrimRunner};
use u_mograph::union_find::UnionFind;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_namoa(c: &mut Criterion) {
    let mut group = c.benchmark_group("namoa");
    group.sample_size(10);

    for (nodes, dim) in [(30usize, 2usize), (60, 2), (60, 3)] {
        let config = InstanceConfig::new(nodes)
            .with_density(0.08)
            .with_dimension(dim)
            .with_seed(42);
        let (graph, weights) = random_graph::<Directed>(&config).expect("valid instance");
        let query = NamoaConfig::new(NodeId::new(0), NodeId::new(nodes - 1));
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_d{}", nodes, dim), nodes),
            &(graph, weights, query),
            |b, (g, w, q)| {
                b.iter(|| {
                    let result = NamoaRunner::run(black_box(g), black_box(w), None, q, &mut NoopSink);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_spanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning");
    group.sample_size(20);

    for nodes in [100usize, 500] {
        let config = InstanceConfig::new(nodes).with_density(0.05).with_seed(7);
        let (graph, weights) = random_graph::<Undirected>(&config).expect("valid instance");
        group.bench_with_input(
            BenchmarkId::new("prim", nodes),
            &(graph.clone(), weights.clone()),
            |b, (g, w)| {
                b.iter(|| black_box(PrimRunner::run(black_box(g), w, &PrimConfig::default())))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("kruskal", nodes),
            &(graph, weights),
            |b, (g, w)| {
                b.iter(|| {
                    black_box(KruskalRunner::run(black_box(g), w, &KruskalConfig::default()))
                })
            },
        );
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for nodes in [200usize, 1000] {
        let config = InstanceConfig::new(nodes).with_density(0.02).with_seed(11);
        let (graph, weights) = random_graph::<Directed>(&config).expect("valid instance");
        let query = DijkstraConfig::new(NodeId::new(0), NodeId::new(nodes - 1));
        group.bench_with_input(
            BenchmarkId::from_parameter(nodes),
            &(graph, weights, query),
            |b, (g, w, q)| b.iter(|| black_box(DijkstraRunner::run(black_box(g), w, q))),
        );
    }
    group.finish();
}

fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for n in [1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut uf = UnionFind::with_capacity(n);
                for i in 0..n {
                    uf.add(i).expect("fresh element");
                }
                for i in (0..n).step_by(2) {
                    uf.union(&i, &((i * 7 + 3) % n)).expect("members");
                }
                black_box(uf.set_count())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_namoa,
    bench_spanning,
    bench_dijkstra,
    bench_union_find
);
criterion_main!(benches);
