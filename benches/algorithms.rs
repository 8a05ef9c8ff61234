use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transit_sssp::graph::generators::{generate_grid_network, generate_random_network};
use transit_sssp::graph::Graph;
use transit_sssp::AlgorithmKind;

// Compares the three strategies on the same origin/destination pair
fn bench_random_networks(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut group = c.benchmark_group("random_network");

    for &size in &[100usize, 400, 1_000] {
        let network = generate_random_network(size, size * 4, 1..=100, 42);
        let destination = size - 1;

        for kind in AlgorithmKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                b.iter(|| {
                    network
                        .shortest_path(kind, black_box(0), black_box(destination))
                        .map(|result| result.distance)
                })
            });
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let network = generate_grid_network(30, 30, 1..=10, 7);
    let destination = network.vertex_count() - 1;
    let mut group = c.benchmark_group("grid_30x30");

    for kind in AlgorithmKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| network.shortest_path(kind, black_box(0), black_box(destination)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_networks, bench_grid);
criterion_main!(benches);
