use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rallyplan::core::{allocate, apportion, CapacityConfig, JoinBounds, TroopPool};

fn allocate_benchmark(c: &mut Criterion) {
    let pool = TroopPool::new(120_000, 95_000, 60_000);
    let capacity = CapacityConfig::new(150_000, 45_000, 6, &JoinBounds::default());

    c.bench_function("allocate six joiners", |b| {
        b.iter(|| allocate(black_box(&pool), black_box(&capacity)))
    });

    c.bench_function("apportion", |b| {
        b.iter(|| apportion(black_box(45_001), black_box([0.41, 0.29, 0.30])))
    });
}

criterion_group!(benches, allocate_benchmark);
criterion_main!(benches);
