use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petgraph::algo::toposort as petgraph_toposort;
use petgraph::graph::DiGraph;
use topsort::{toposort_with, EdgeSource, SortOptions, TieBreak};

// Plain index-based Kahn for comparison
fn std_kahn(deps: &[Vec<usize>]) -> Option<Vec<usize>> {
    let n = deps.len();
    let mut indeg = vec![0usize; n];
    let mut dependents = vec![Vec::new(); n];
    for (v, ds) in deps.iter().enumerate() {
        indeg[v] = ds.len();
        for &d in ds {
            dependents[d].push(v);
        }
    }

    let mut q: std::collections::VecDeque<usize> = (0..n).filter(|&v| indeg[v] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = q.pop_front() {
        order.push(u);
        for &v in &dependents[u] {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                q.push_back(v);
            }
        }
    }

    (order.len() == n).then_some(order)
}

/// Layered DAG: every vertex depends on up to `fan_in` vertices of the previous layer.
fn layered(layers: usize, width: usize, fan_in: usize) -> Vec<Vec<usize>> {
    let mut deps = Vec::with_capacity(layers * width);
    for layer in 0..layers {
        for i in 0..width {
            if layer == 0 {
                deps.push(Vec::new());
            } else {
                let base = (layer - 1) * width;
                deps.push((0..fan_in).map(|k| base + (i + k) % width).collect());
            }
        }
    }
    deps
}

fn create_test_graphs() -> Vec<(&'static str, Vec<Vec<usize>>)> {
    vec![
        ("chain_1k", (0..1000).map(|v| if v == 0 { vec![] } else { vec![v - 1] }).collect()),
        ("layered_32x32", layered(32, 32, 4)),
        ("layered_100x100", layered(100, 100, 8)),
    ]
}

fn bench_toposort(c: &mut Criterion) {
    let mut group = c.benchmark_group("toposort");

    for (name, deps) in create_test_graphs() {
        let n = deps.len();

        group.bench_with_input(BenchmarkId::new("topsort_fifo", name), &deps, |b, deps| {
            b.iter(|| {
                black_box(toposort_with(
                    0..n,
                    EdgeSource::aligned(deps.clone()),
                    &SortOptions::default(),
                    |_| false,
                    |_| {},
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("topsort_lifo", name), &deps, |b, deps| {
            let opts = SortOptions::default().with_tie_break(TieBreak::Lifo);
            b.iter(|| {
                black_box(toposort_with(
                    0..n,
                    EdgeSource::aligned(deps.clone()),
                    &opts,
                    |_| false,
                    |_| {},
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("std_kahn", name), &deps, |b, deps| {
            b.iter(|| black_box(std_kahn(deps)));
        });

        group.bench_with_input(BenchmarkId::new("petgraph", name), &deps, |b, deps| {
            b.iter(|| {
                let mut g = DiGraph::<(), ()>::with_capacity(n, 0);
                let idx: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
                for (v, ds) in deps.iter().enumerate() {
                    for &d in ds {
                        g.add_edge(idx[d], idx[v], ());
                    }
                }
                black_box(petgraph_toposort(&g, None).is_ok())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_toposort);
criterion_main!(benches);
