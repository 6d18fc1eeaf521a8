use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use karray::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;
    let random_ints: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("par_sort (default budget)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| par_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("par_sort (budget 0)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| par_sort_with_budget(black_box(&mut data), 0),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("Append");
    let count = 10_000u32;

    group.bench_function("DynamicArray::push_back", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..count {
                array.push_back(black_box(i));
            }
            array
        })
    });

    group.bench_function("Vec::push", |b| {
        b.iter(|| {
            let mut vector = Vec::new();
            for i in 0..count {
                vector.push(black_box(i));
            }
            vector
        })
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_push_back);
criterion_main!(benches);
