//! MSD radix sort with an oracle and McIlroy-Bostic-McIlroy in-place distribution.
//!
//! The oracle is the per-call array of every string's current character, read once
//! from the strings and then only from the (sequential, compact) oracle while
//! permuting. Bucket indices count down to each bucket's next free slot; the string
//! sitting in that slot is backed up together with its oracle byte and becomes the
//! next one to place.

use super::radix::{RadixCounts, bucket_ends, sort_smaller_buckets};
use crate::core::{char_at, insertion_sort, scratch};

/// Sub-problems smaller than this are handed to insertion sort.
const INSERTION_THRESHOLD: usize = 64;

/// A string travelling through the permutation with its bucket.
#[derive(Clone, Copy)]
struct DistBlock<T> {
    string: T,
    bucket: u8,
}

/// Sorts `strings` ascending one byte at a time, starting at `depth`.
///
/// Produces the same order as [`msd_radix_sort`](crate::msd_radix_sort); only the
/// permutation bookkeeping differs.
///
/// # Examples
///
/// ```
/// use stringsort::oracle_radix_sort;
///
/// let mut data = vec!["band", "banana", "ban", "apple"];
/// oracle_radix_sort(&mut data, 0);
///
/// assert_eq!(data, vec!["apple", "ban", "banana", "band"]);
/// ```
pub fn oracle_radix_sort<T: AsRef<[u8]> + Copy>(mut strings: &mut [T], mut depth: usize) {
    while strings.len() >= INSERTION_THRESHOLD {
        let bucket_size = distribute(strings, depth);
        let current = std::mem::take(&mut strings);
        let next = depth + 1;
        match sort_smaller_buckets(current, &bucket_size.data, |_| true, |bucket| {
            oracle_radix_sort(bucket, next)
        }) {
            Some(largest) => {
                strings = largest;
                depth = next;
            }
            None => return,
        }
    }
    insertion_sort(strings, depth);
}

/// Fills the oracle, counts bucket sizes and moves every string into its bucket.
/// Returns the bucket sizes.
#[inline(never)]
fn distribute<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) -> RadixCounts {
    let n = strings.len();
    let mut bucket_size = RadixCounts::new();

    let mut oracle: Vec<u8> = scratch(n);
    oracle.extend(strings.iter().map(|s| char_at(s.as_ref(), depth)));
    oracle.iter().for_each(|&ch| bucket_size.data[ch as usize] += 1);

    let mut bucket_index = RadixCounts::new();
    let last = bucket_ends(&bucket_size.data, &mut bucket_index.data);
    let bucket_index = &mut bucket_index.data;

    let mut i = 0;
    while i < n - last {
        let mut tmp = DistBlock {
            string: strings[i],
            bucket: oracle[i],
        };
        loop {
            // Stop once the current bucket is completely in place.
            let slot = &mut bucket_index[tmp.bucket as usize];
            *slot -= 1;
            let backup_idx = *slot;
            if backup_idx <= i {
                break;
            }
            let backup = DistBlock {
                string: strings[backup_idx],
                bucket: oracle[backup_idx],
            };
            strings[backup_idx] = tmp.string;
            oracle[backup_idx] = tmp.bucket;
            tmp = backup;
        }
        // The oracle entry at `i` is never read again.
        strings[i] = tmp.string;
        i += bucket_size.data[tmp.bucket as usize];
    }

    bucket_size
}
