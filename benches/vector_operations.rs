//! Benchmarks for vector reductions and arena placement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mia::memory::Arena;
use mia::numerics::{Vector, Vector3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");
    let mut rng = StdRng::seed_from_u64(42);

    let a: Vector3 = Vector3::random_range_with(&mut rng, 100.0);
    let b: Vector3 = Vector3::random_range_with(&mut rng, 100.0);

    group.bench_function("dot_product_f32x3", |bench| {
        bench.iter(|| Vector::dot_product(black_box(&a), black_box(&b)))
    });

    group.bench_function("cross_product_f32x3", |bench| {
        bench.iter(|| Vector::cross_product(black_box(&a), black_box(&b)))
    });

    group.bench_function("normalized_f32x3", |bench| {
        bench.iter(|| black_box(&a).normalized())
    });

    group.bench_function("angle_f32x3", |bench| {
        bench.iter(|| Vector::angle(black_box(&a), black_box(&b)))
    });

    let wide_a = Vector::<f64, 16>::random_range_with(&mut rng, 100.0);
    let wide_b = Vector::<f64, 16>::random_range_with(&mut rng, 100.0);
    group.bench_function("distance_f64x16", |bench| {
        bench.iter(|| Vector::distance(black_box(&wide_a), black_box(&wide_b)))
    });

    group.finish();
}

fn bench_batch_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_placement");

    let counts = [16, 64, 256];

    for &count in &counts {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let points: Vec<Vector3> = (0..count)
            .map(|_| Vector3::random_range_with(&mut rng, 1.0))
            .collect();

        // Heap-allocated batch
        group.bench_with_input(BenchmarkId::new("vec_clone", count), &points, |b, points| {
            b.iter(|| {
                let copy = points.clone();
                black_box(copy);
            })
        });

        // Arena batch, reclaimed with a single reset
        group.bench_with_input(BenchmarkId::new("arena_copy", count), &points, |b, points| {
            let mut arena = Arena::with_capacity(64 * 1024).unwrap();
            b.iter(|| {
                arena.reset();
                let placed = arena.alloc_slice_copy(points).unwrap();
                black_box(placed);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reductions, bench_batch_placement);
criterion_main!(benches);
