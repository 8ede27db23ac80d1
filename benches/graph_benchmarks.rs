use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use diagraph::GraphStore;

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = GraphStore::new();
                for i in 0..size {
                    store
                        .insert_node_with_style(&format!("device-{}", i), "device")
                        .unwrap();
                }
                criterion::black_box(store.node_count());
            });
        });
    }
    group.finish();
}

/// Benchmark arc insertion along a chain of devices
fn bench_arc_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut store = GraphStore::new();
                    for i in 0..size {
                        store.insert_node(&format!("device-{}", i)).unwrap();
                    }
                    store
                },
                |mut store| {
                    for i in 0..size - 1 {
                        store
                            .insert_arc(&format!("device-{}", i), &format!("device-{}", i + 1))
                            .unwrap();
                    }
                    criterion::black_box(store.arc_count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark cascade removal of a heavily-connected hub node
fn bench_cascade_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade_removal");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut store = GraphStore::new();
                    store.insert_node("hub").unwrap();
                    for i in 0..size {
                        let name = format!("leaf-{}", i);
                        store.insert_node(&name).unwrap();
                        store.insert_arc("hub", &name).unwrap();
                    }
                    store
                },
                |mut store| {
                    criterion::black_box(store.remove_node("hub"));
                    criterion::black_box(store.arc_count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark a full redraw pass over the bulk views
fn bench_bulk_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_iteration");

    for size in [100, 1000, 10_000].iter() {
        let mut store = GraphStore::new();
        for i in 0..*size {
            store
                .insert_node_with_style(&format!("device-{}", i), "device")
                .unwrap();
        }
        for i in 0..*size - 1 {
            store
                .insert_arc(&format!("device-{}", i), &format!("device-{}", i + 1))
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut styled = 0usize;
                for record in store.nodes().values() {
                    if !record.is_null("style") {
                        styled += 1;
                    }
                }
                criterion::black_box(styled + store.arcs().len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_arc_insertion,
    bench_cascade_removal,
    bench_bulk_iteration,
);
criterion_main!(benches);
