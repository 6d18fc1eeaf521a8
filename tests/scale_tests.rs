use karray::prelude::*;
use rand::Rng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("karray=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_sort_1m() {
    init_tracing();
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: DynamicArray<u64> = DynamicArray::with_capacity(count);
    for _ in 0..count {
        input.push_back(rng.random());
    }
    assert_eq!(input.capacity(), count);

    let mut expected = input.clone();
    expected.sort_unstable();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let stats = par_sort_with_budget(&mut input, 16);
    println!("Sorted 1M elements in {:?} ({:?})", start.elapsed(), stats);

    // Budget 16 allows splits on 8 levels (16, 14, ..., 2).
    assert_eq!(stats.max_depth, 8);
    assert_eq!(stats.splits, 255);
    assert_eq!(input, expected);
}

#[test]
fn test_many_duplicates_large() {
    let mut rng = rand::rng();
    let mut input: Vec<u8> = (0..200_000).map(|_| rng.random_range(0..4)).collect();
    let mut expected = input.clone();
    expected.sort();

    par_sort_with_budget(&mut input, 32);
    assert_eq!(input, expected);
}

#[test]
fn test_growth_to_large_length() {
    init_tracing();
    let mut array = DynamicArray::new();
    for i in 0..100_000u32 {
        array.push_back(i);
    }
    assert_eq!(array.length(), 100_000);
    assert_eq!(array.capacity(), 131_072);
    assert!(array.iter().copied().eq(0..100_000));

    while array.pop_back().is_some() {}
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 131_072);
}

#[test]
fn test_sort_strings() {
    let mut rng = rand::rng();
    let mut input: Vec<String> = (0..20_000)
        .map(|_| {
            let len = rng.random_range(0..12);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();
    let mut expected = input.clone();
    expected.sort();

    let stats = par_sort_with_budget(&mut input, 6);
    assert_eq!(stats.splits, 7);
    assert_eq!(input, expected);
}

#[test]
#[ignore]
fn test_sort_100m() {
    // Roughly 800MB of u64 input.
    let count = 100_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    let stats = par_sort(&mut input);
    println!("Sorted 100M elements in {:?} ({:?})", start.elapsed(), stats);

    assert!(input.windows(2).all(|w| w[0] <= w[1]));
}
