use flagsort::prelude::*;
use rand::Rng;

#[test]
fn test_basic_sort_signed() {
    let mut data = vec![5_i32, -3, 0, i32::MAX, i32::MIN, -1];

    sort(&mut data);

    assert_eq!(data, vec![i32::MIN, -3, -1, 0, 5, i32::MAX]);
}

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<u64> = vec![];
    sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![42_u64];
    sort(&mut single);
    assert_eq!(single, vec![42]);
}

#[test]
fn test_threshold_boundaries() {
    // Lengths straddling the insertion-sort cutoff at 64.
    for len in [2_u32, 63, 64, 65, 66, 128] {
        let mut data: Vec<u32> = (0..len).rev().collect();

        sort(&mut data);

        let expected: Vec<u32> = (0..len).collect();
        assert_eq!(data, expected, "failed at len {}", len);
    }
}

#[test]
fn test_all_equal() {
    let mut data = vec![7_u8; 1000];
    sort(&mut data);
    assert_eq!(data, vec![7_u8; 1000]);
}

#[test]
fn test_sorted_and_reversed() {
    let mut ascending: Vec<u16> = (0..5000).collect();
    sort(&mut ascending);
    assert_eq!(ascending, (0..5000).collect::<Vec<u16>>());

    let mut descending: Vec<u16> = (0..5000).rev().collect();
    sort(&mut descending);
    assert_eq!(descending, (0..5000).collect::<Vec<u16>>());
}

#[test]
fn test_full_i8_domain() {
    // Every i8 value twice, so a single partitioning level fills all 256
    // buckets and crosses the sign boundary.
    let mut data: Vec<i8> = (i8::MIN..=i8::MAX).rev().collect();
    data.extend(i8::MIN..=i8::MAX);

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_many_duplicates() {
    let mut rng = rand::rng();
    // Only 16 distinct values across 50k slots, so most digit levels are
    // degenerate.
    let mut data: Vec<u64> = (0..50_000).map(|_| rng.random_range(0..16)).collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_idempotent() {
    let mut rng = rand::rng();
    let mut data: Vec<u32> = (0..10_000).map(|_| rng.random()).collect();

    sort(&mut data);
    let first_pass = data.clone();
    sort(&mut data);

    assert_eq!(data, first_pass);
}

#[test]
fn test_random_u64_matches_std() {
    let mut rng = rand::rng();
    let mut data: Vec<u64> = (0..100_000).map(|_| rng.random()).collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_random_signed_matches_std() {
    let mut rng = rand::rng();
    let mut data: Vec<i64> = (0..100_000).map(|_| rng.random()).collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_u128_keys() {
    let mut rng = rand::rng();
    let mut data: Vec<u128> = (0..20_000).map(|_| rng.random()).collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_pair_keys() {
    let mut rng = rand::rng();
    // The u8 half dominates, the u64 half breaks ties.
    let mut data: Vec<(u8, u64)> = (0..50_000)
        .map(|_| (rng.random_range(0..4), rng.random()))
        .collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_array_keys() {
    let mut rng = rand::rng();
    let mut data: Vec<[u8; 16]> = (0..30_000)
        .map(|_| {
            let mut key = [0u8; 16];
            rng.fill(&mut key[..]);
            key
        })
        .collect();

    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_sort_by_unordered_payload() {
    // f32 payload keeps the element type out of Ord; sort_by supplies the
    // comparator instead.
    #[derive(Clone, Copy)]
    struct Reading {
        sensor: u32,
        volts: f32,
    }

    impl RadixKey for Reading {
        const DIGITS: usize = 4;

        fn digit(&self, position: usize) -> u8 {
            self.sensor.digit(position)
        }
    }

    let mut rng = rand::rng();
    let mut data: Vec<Reading> = (0..5_000)
        .map(|_| Reading {
            sensor: rng.random(),
            volts: rng.random(),
        })
        .collect();

    sort_by(&mut data, |a, b| a.sensor.cmp(&b.sensor));

    assert!(data.windows(2).all(|w| w[0].sensor <= w[1].sensor));
    assert!(data.iter().all(|r| (0.0..1.0).contains(&r.volts)));
}

#[test]
fn test_sort_by_key_projection() {
    let mut rng = rand::rng();
    // Non-Copy payload rides along; only the numeric component is keyed.
    let mut data: Vec<(u64, String)> = (0..2_000)
        .map(|i| (rng.random(), format!("payload-{}", i)))
        .collect();

    sort_by_key(&mut data, |item| item.0);

    assert!(data.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn test_sort_by_key_descending() {
    let mut rng = rand::rng();
    let mut data: Vec<u32> = (0..10_000).map(|_| rng.random()).collect();

    // Complementing the key reverses the order without touching the data.
    sort_by_key(&mut data, |&x| !x);

    assert!(data.windows(2).all(|w| w[0] >= w[1]));
}
