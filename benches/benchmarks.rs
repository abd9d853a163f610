//! Criterion benchmarks for WeightedGraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_graph::graph::WeightedGraph;

/// Build a connected random graph: a random spanning chain plus extra edges.
fn make_graph(node_count: usize, edges_per_node: usize) -> WeightedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = WeightedGraph::new();

    for i in 0..node_count {
        graph.add_node(&format!("node_{}", i));
    }
    for i in 1..node_count {
        let j = rng.gen_range(0..i);
        let _ = graph.add_edge(
            &format!("node_{}", i),
            &format!("node_{}", j),
            rng.gen_range(1..100),
        );
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            // Self-loops and duplicates are rejected; skip them.
            let _ = graph.add_edge(
                &format!("node_{}", i),
                &format!("node_{}", target),
                rng.gen_range(1..100),
            );
        }
    }

    graph
}

fn bench_add_edges(c: &mut Criterion) {
    c.bench_function("build_1k_nodes_5_edges", |b| {
        b.iter(|| make_graph(1_000, 5));
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_graph(10_000, 5);
    c.bench_function("dijkstra_10k_nodes", |b| {
        b.iter(|| graph.shortest_path("node_0", "node_9999").unwrap());
    });
}

fn bench_spanning_tree(c: &mut Criterion) {
    let graph = make_graph(10_000, 5);
    c.bench_function("prim_10k_nodes", |b| {
        b.iter(|| graph.minimum_spanning_tree().unwrap());
    });
}

fn bench_has_cycle(c: &mut Criterion) {
    let graph = make_graph(10_000, 5);
    let tree = graph.minimum_spanning_tree().unwrap();
    c.bench_function("cycle_check_10k_tree", |b| {
        b.iter(|| tree.has_cycle());
    });
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_shortest_path,
    bench_spanning_tree,
    bench_has_cycle
);
criterion_main!(benches);
