use classort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_merge_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    merge_sort(&mut input);
    println!("Sorted 1M elements in {:?}", start.elapsed());

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_merge_sort_bottom_up_1m() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..10_000)).collect();

    let mut expected = input.clone();
    expected.sort();

    let mut actual = input;
    let start = Instant::now();
    merge_sort_bottom_up(&mut actual);
    println!("Sorted 1M elements bottom-up in {:?}", start.elapsed());

    assert_eq!(actual, expected);
}

#[test]
fn test_counting_sort_1m_wide_domain() {
    let count = 1_000_000;
    let max_value = 1_000_000u32;
    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..=max_value)).collect();

    let mut expected = input.clone();
    expected.sort();

    let mut actual = input;
    let start = Instant::now();
    counting_sort(&mut actual, max_value).unwrap();
    println!("Counting-sorted 1M elements in {:?}", start.elapsed());

    assert_eq!(actual, expected);
}

#[test]
fn test_quadratic_sorts_5k() {
    let count = 5_000;
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..count).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort();

    for algo in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        let mut actual = input.clone();
        let start = Instant::now();
        algo.sort(&mut actual);
        println!("{} on {} elements took {:?}", algo.name(), count, start.elapsed());
        assert_eq!(actual, expected, "{}", algo.name());
    }
}

#[test]
#[ignore]
fn test_merge_sort_100m() {
    // WARNING: ~800MB for the input plus the same again for merge buffers.
    let count = 100_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    merge_sort_bottom_up(&mut input);
    println!("Sorted 100M elements in {:?}", start.elapsed());

    for i in (0..count - 1).step_by(10_000) {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
