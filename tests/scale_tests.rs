use rand::Rng;
use stringsort::prelude::*;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..16);
            (0..len).map(|_| rng.random_range(1..=255u8)).collect()
        })
        .collect();

    // Large enough for the two-byte radix path.
    for algorithm in [Algorithm::MsdRadix16, Algorithm::MultikeyQuicksort] {
        let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();

        println!("Sorting {} elements with {}...", count, algorithm);
        let start = Instant::now();
        algorithm.sort(&mut data, 0);
        println!("Sorted 1M elements in {:?}", start.elapsed());

        assert_eq!(data.len(), count);
        verify_sorted(&data).unwrap();
    }
}

#[test]
fn test_wide_radix_low_entropy() {
    // Few distinct two-byte units, many strings ending on either byte of a pair.
    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..200_000)
        .map(|_| {
            let len = rng.random_range(0..7);
            (0..len).map(|_| rng.random_range(b'x'..=b'z')).collect()
        })
        .collect();

    let mut expected = input.clone();
    expected.sort();

    let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
    msd_radix_sort_16(&mut data, 0);
    assert_eq!(data, expected);
}

#[test]
fn test_wide_radix_odd_start_depth() {
    // Shared 3-byte prefix skipped, so every two-byte unit straddles the prefix parity.
    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..100_000)
        .map(|_| {
            let len = rng.random_range(0..9);
            let mut row = b"id:".to_vec();
            row.extend((0..len).map(|_| rng.random_range(b'0'..=b'9')));
            row
        })
        .collect();

    let mut from_start: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
    msd_radix_sort_16(&mut from_start, 0);

    let mut skipped: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
    msd_radix_sort_16(&mut skipped, 3);

    assert_eq!(skipped, from_start);
    verify_sorted(&skipped).unwrap();
}

#[test]
fn test_duplicates_terminate() {
    let line = "q".repeat(50);

    for algorithm in ALL_ALGORITHMS {
        let mut data = vec![line.as_str(); 100_000];
        let start = Instant::now();
        algorithm.sort(&mut data, 0);
        println!("{} sorted 100000 duplicates in {:?}", algorithm, start.elapsed());

        assert_eq!(data.len(), 100_000);
        assert!(data.iter().all(|s| *s == line));
    }
}

#[test]
fn test_cross_algorithm_agreement() {
    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..100_000)
        .map(|_| {
            let len = rng.random_range(0..24);
            (0..len).map(|_| rng.random_range(b'a'..=b'p')).collect()
        })
        .collect();

    let mut reference: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
    Algorithm::Mergesort.sort(&mut reference, 0);

    for algorithm in ALL_ALGORITHMS {
        let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
        algorithm.sort(&mut data, 0);
        assert_eq!(data, reference, "{algorithm} disagrees with mergesort");
    }
}

#[test]
#[ignore]
fn test_sort_20m() {
    // WARNING: needs a few GB of RAM.
    // 20M lines * ~12 bytes in one buffer plus 16 bytes per reference.
    let count = 20_000_000;
    println!("Generating {} random lines...", count);

    let mut rng = rand::rng();
    let mut buffer = Vec::with_capacity(count * 13);
    for _ in 0..count {
        let len = rng.random_range(4..20);
        buffer.extend((0..len).map(|_| rng.random_range(b' '..=b'~')));
        buffer.push(b'\n');
    }

    let mut lines = split_lines(&buffer).unwrap();
    assert_eq!(lines.len(), count);

    for algorithm in ALL_ALGORITHMS {
        println!("Sorting {} lines with {}...", count, algorithm);
        let start = Instant::now();
        algorithm.sort(&mut lines, 0);
        println!("Sorted in {:?}", start.elapsed());

        // limited verification to save time
        for i in (0..count - 1).step_by(10_000) {
            assert!(lines[i] <= lines[i + 1], "Sort failed at index {}", i);
        }
    }
}
