use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortkit::prelude::*;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("i32 Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<i32> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("quick_sort", |b| {
        b.iter(|| quick_sort(black_box(&input)))
    });

    group.bench_function("dual_pivot_quick_sort", |b| {
        b.iter(|| dual_pivot_quick_sort(black_box(&input)))
    });

    group.bench_function("merge_sort", |b| {
        b.iter(|| merge_sort(black_box(&input)))
    });

    group.bench_function("tim_sort", |b| b.iter(|| tim_sort(black_box(&input))));

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_few_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("Few Unique");
    group.sample_size(10);

    // Heavy duplicates favour the dual-pivot middle partition.
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..10_000).map(|_| rng.random_range(0..8)).collect();

    group.bench_function("quick_sort", |b| {
        b.iter(|| quick_sort(black_box(&input)))
    });

    group.bench_function("dual_pivot_quick_sort", |b| {
        b.iter(|| dual_pivot_quick_sort(black_box(&input)))
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<String> = (0..10_000)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    group.bench_function("tim_sort", |b| b.iter(|| tim_sort(black_box(&input))));

    group.bench_function("merge_sort", |b| {
        b.iter(|| merge_sort(black_box(&input)))
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_few_unique, bench_strings);
criterion_main!(benches);
