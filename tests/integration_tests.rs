use rand::Rng;
use stringsort::io::write_descending;
use stringsort::prelude::*;

fn random_row(
    rng: &mut impl Rng,
    max_len: usize,
    alphabet: std::ops::RangeInclusive<u8>,
) -> Vec<u8> {
    let len = rng.random_range(0..max_len);
    (0..len).map(|_| rng.random_range(alphabet.clone())).collect()
}

#[test]
fn test_basic_sort_strings() {
    for algorithm in ALL_ALGORITHMS {
        let mut data = vec!["banana", "apple", "band", "ban"];
        algorithm.sort(&mut data, 0);
        assert_eq!(data, vec!["apple", "ban", "banana", "band"], "{algorithm}");
    }
}

#[test]
fn test_descending_output() {
    let mut data = vec!["banana", "apple", "band", "ban"];
    Algorithm::Oracle.sort(&mut data, 0);

    let mut out = Vec::new();
    write_descending(&mut out, &data).unwrap();
    assert_eq!(out, b"band\nbanana\nban\napple\n");
}

#[test]
fn test_prefix_orders_first() {
    for algorithm in ALL_ALGORITHMS {
        let mut data = vec!["abc", "ab", "abcd", "a", ""];
        algorithm.sort(&mut data, 0);
        assert_eq!(data, vec!["", "a", "ab", "abc", "abcd"], "{algorithm}");
    }
}

#[test]
fn test_empty_and_single() {
    for algorithm in ALL_ALGORITHMS {
        let mut empty: Vec<&str> = vec![];
        algorithm.sort(&mut empty, 0);
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        algorithm.sort(&mut single, 0);
        assert_eq!(single, vec!["only"]);
    }
}

#[test]
fn test_identical_empty_strings() {
    for algorithm in ALL_ALGORITHMS {
        let mut data = vec![""; 500];
        algorithm.sort(&mut data, 0);
        assert_eq!(data, vec![""; 500]);
    }
}

#[test]
fn test_long_common_prefix() {
    let prefix = "a".repeat(100);
    for algorithm in ALL_ALGORITHMS {
        let input: Vec<String> = (0..200)
            .map(|i| format!("{}{}", prefix, (b'z' - (i % 26) as u8) as char))
            .collect();
        let mut data: Vec<&str> = input.iter().map(String::as_str).collect();
        algorithm.sort(&mut data, 0);

        let mut expected = data.clone();
        expected.sort();
        assert_eq!(data, expected, "{algorithm}");
        assert!(data[0].ends_with('a'));
        assert!(data[199].ends_with('z'));
    }
}

#[test]
fn test_start_depth_matches_full_sort() {
    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..3000)
        .map(|_| {
            let mut row = b"key:".to_vec();
            row.extend(random_row(&mut rng, 12, b'a'..=b'f'));
            row
        })
        .collect();

    for algorithm in ALL_ALGORITHMS {
        let mut from_zero: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
        let mut from_four = from_zero.clone();
        algorithm.sort(&mut from_zero, 0);
        algorithm.sort(&mut from_four, 4);
        assert_eq!(from_zero, from_four, "{algorithm}");
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();
    let input: Vec<Vec<u8>> = (0..10_000).map(|_| random_row(&mut rng, 50, 1..=255)).collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in ALL_ALGORITHMS {
        let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
        algorithm.sort(&mut data, 0);
        assert_eq!(data, expected, "{algorithm}");
    }
}

#[test]
fn test_fuzz_small_alphabet() {
    let mut rng = rand::rng();

    // Many duplicates and shared prefixes; exercises the equal partitions and
    // deep radix recursion.
    for _ in 0..200 {
        let count = rng.random_range(0..400);
        let input: Vec<Vec<u8>> = (0..count)
            .map(|_| random_row(&mut rng, 8, b'a'..=b'c'))
            .collect();

        let mut expected = input.clone();
        expected.sort();

        for algorithm in ALL_ALGORITHMS {
            let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
            algorithm.sort(&mut data, 0);
            assert_eq!(data, expected, "{algorithm}");
        }
    }
}

#[test]
fn test_fuzz_edge_cases() {
    for algorithm in ALL_ALGORITHMS {
        // All same
        let mut data = vec!["xyz"; 300];
        algorithm.sort(&mut data, 0);
        assert_eq!(data, vec!["xyz"; 300]);

        // Reversed
        let input: Vec<Vec<u8>> = (1..=255u8).rev().map(|b| vec![b, b]).collect();
        let mut data: Vec<&[u8]> = input.iter().map(Vec::as_slice).collect();
        algorithm.sort(&mut data, 0);
        assert!(is_sorted(&data), "{algorithm}");

        // Sorted input is left as is
        let expected = data.clone();
        algorithm.sort(&mut data, 0);
        assert_eq!(data, expected, "{algorithm}");
    }
}

#[test]
fn test_high_bytes() {
    let input: Vec<Vec<u8>> = vec![
        vec![0xff, 0x01],
        vec![0x80],
        vec![0x7f, 0xff],
        vec![0xff],
        vec![0x01],
        vec![0x80, 0x80],
    ];
    let mut expected = input.clone();
    expected.sort();

    for algorithm in ALL_ALGORITHMS {
        // Repeat so the radix variants get past their insertion sort cut-off.
        let mut data: Vec<&[u8]> = input.iter().cycle().take(600).map(Vec::as_slice).collect();
        algorithm.sort(&mut data, 0);
        let deduped: Vec<&[u8]> = data.chunks(100).map(|chunk| chunk[0]).collect();
        assert_eq!(deduped, expected, "{algorithm}");
    }
}

#[test]
fn test_mergesort_is_stable() {
    // Equal contents at increasing addresses within one buffer; the sort must keep
    // them in input order.
    let text = "beta alpha gamma ".repeat(70);
    let mut data: Vec<&str> = text.split_whitespace().collect();
    mergesort(&mut data, 0);
    assert!(is_sorted(&data));

    for window in data.windows(2) {
        if window[0] == window[1] {
            assert!(window[0].as_ptr() < window[1].as_ptr());
        }
    }
}

#[test]
fn test_compare() {
    use std::cmp::Ordering;

    assert_eq!(compare(b"ab", b"abc", 0), Ordering::Less);
    assert_eq!(compare(b"abd", b"abc", 0), Ordering::Greater);
    assert_eq!(compare(b"", b"", 0), Ordering::Equal);
    // Bytes before depth are not inspected.
    assert_eq!(compare(b"zb", b"ac", 1), Ordering::Less);
}

#[test]
fn test_algorithm_names() {
    for algorithm in ALL_ALGORITHMS {
        let parsed: Algorithm = algorithm.name().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }
    assert!("bogus".parse::<Algorithm>().is_err());
    assert_eq!(Algorithm::default(), Algorithm::MultikeyQuicksort);
}
