//! MSD radix sort with in-place cyclic permutation.
//!
//! Each step caches the discriminating character of every string, counts bucket
//! sizes, and then moves every string into its bucket without an auxiliary pointer
//! array: following the cycle "this string's bucket boundary is its home" until it
//! closes. Buckets are then sorted recursively one character deeper.
//!
//! Two character widths are provided:
//! - [`msd_radix_sort`]: one byte per step, 256 buckets.
//! - [`msd_radix_sort_16`]: two bytes per step, 65536 buckets, for large inputs.

use crate::core::{TERMINATOR, char_at, insertion_sort, scratch};
use cuneiform::cuneiform;

/// Sub-problems smaller than this are handed to insertion sort.
const INSERTION_THRESHOLD: usize = 64;

/// Number of buckets for a one-byte step (the terminator has its own bucket 0).
pub(crate) const RADIX_BUCKETS: usize = 256;

/// Number of buckets for a two-byte step.
const WIDE_BUCKETS: usize = 1 << 16;

/// Below this size the 65536-entry tables cost more than they save.
const WIDE_THRESHOLD: usize = WIDE_BUCKETS;

// Cache-aligned bucket table.
#[cuneiform]
pub(crate) struct RadixCounts {
    pub(crate) data: [usize; RADIX_BUCKETS],
}

impl RadixCounts {
    pub(crate) fn new() -> Self {
        Self {
            data: [0; RADIX_BUCKETS],
        }
    }
}

/// Sorts `strings` ascending one byte at a time, starting at `depth`.
///
/// Allocates one byte per string plus two 256-entry tables per step.
///
/// # Examples
///
/// ```
/// use stringsort::msd_radix_sort;
///
/// let mut data = vec!["banana", "apple", "band", "ban"];
/// msd_radix_sort(&mut data, 0);
///
/// assert_eq!(data, vec!["apple", "ban", "banana", "band"]);
/// ```
pub fn msd_radix_sort<T: AsRef<[u8]> + Copy>(mut strings: &mut [T], mut depth: usize) {
    while strings.len() >= INSERTION_THRESHOLD {
        let sizes = distribute(strings, depth);
        let current = std::mem::take(&mut strings);
        let next = depth + 1;
        match sort_smaller_buckets(current, &sizes.data, |_| true, |bucket| {
            msd_radix_sort(bucket, next)
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

/// Sorts `strings` ascending two bytes at a time, starting at `depth`.
///
/// Inputs with fewer than 65536 strings (including every bucket that shrinks below
/// that size) continue with [`msd_radix_sort`].
pub fn msd_radix_sort_16<T: AsRef<[u8]> + Copy>(mut strings: &mut [T], mut depth: usize) {
    while strings.len() >= WIDE_THRESHOLD {
        let sizes = distribute_wide(strings, depth);
        let current = std::mem::take(&mut strings);
        let next = depth + 2;
        // Strings ending on the second byte of the pair are all identical.
        let unfinished = |unit: usize| (unit & 0xFF) as u8 != TERMINATOR;
        match sort_smaller_buckets(current, &sizes, unfinished, |bucket| {
            msd_radix_sort_16(bucket, next)
        }) {
            Some(largest) => {
                strings = largest;
                depth = next;
            }
            None => return,
        }
    }
    msd_radix_sort(strings, depth);
}

/// Reads the two-byte unit at `depth`. A terminator in the first byte forces the
/// second to zero so nothing past the end of the string is inspected.
#[inline(always)]
fn wide_char_at(key: &[u8], depth: usize) -> u16 {
    let hi = char_at(key, depth);
    if hi == TERMINATOR {
        return 0;
    }
    (u16::from(hi) << 8) | u16::from(char_at(key, depth + 1))
}

/// One counting-sort step on single bytes. Returns the bucket sizes.
#[inline(never)]
fn distribute<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) -> RadixCounts {
    let mut cache: Vec<u8> = scratch(strings.len());
    cache.extend(strings.iter().map(|s| char_at(s.as_ref(), depth)));

    let mut sizes = RadixCounts::new();
    cache.iter().for_each(|&ch| sizes.data[ch as usize] += 1);

    let mut ends = RadixCounts::new();
    let last = bucket_ends(&sizes.data, &mut ends.data);
    permute(strings, &mut cache, &sizes.data, &mut ends.data, last);

    sizes
}

/// One counting-sort step on two-byte units. Returns the bucket sizes.
#[inline(never)]
fn distribute_wide<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) -> Vec<usize> {
    let mut cache: Vec<u16> = scratch(strings.len());
    cache.extend(strings.iter().map(|s| wide_char_at(s.as_ref(), depth)));

    let mut sizes: Vec<usize> = scratch(WIDE_BUCKETS);
    sizes.resize(WIDE_BUCKETS, 0);
    cache.iter().for_each(|&unit| sizes[unit as usize] += 1);

    let mut ends: Vec<usize> = scratch(WIDE_BUCKETS);
    ends.resize(WIDE_BUCKETS, 0);
    let last = bucket_ends(&sizes, &mut ends);
    permute(strings, &mut cache, &sizes, &mut ends, last);

    sizes
}

/// Writes the inclusive prefix sum of `sizes` into `ends`, so `ends[b]` is one past
/// the last slot of bucket `b`. Returns the size of the last non-empty bucket.
pub(crate) fn bucket_ends(sizes: &[usize], ends: &mut [usize]) -> usize {
    let mut sum = 0;
    let mut last = 0;
    ends.iter_mut().zip(sizes).for_each(|(end, &size)| {
        sum += size;
        *end = sum;
        if size != 0 {
            last = size;
        }
    });
    last
}

/// Moves every string into its bucket in place.
///
/// Each step decrements the boundary of the carried string's bucket and drops the
/// string there, picking up whatever was in that slot. The cycle closes when the
/// boundary reaches the cycle start `i`. Every decrement settles exactly one string,
/// so at most `n` decrements happen; `placed` tracks that bound. The last non-empty
/// bucket is settled implicitly once everything before it is.
fn permute<T: Copy, K: Copy + Into<usize>>(
    strings: &mut [T],
    cache: &mut [K],
    sizes: &[usize],
    ends: &mut [usize],
    last: usize,
) {
    let n = strings.len();
    let mut placed = 0usize;
    let mut i = 0;

    while i < n - last {
        let mut perm = strings[i];
        let mut perm_key = cache[i];
        loop {
            let bucket: usize = perm_key.into();
            let end = &mut ends[bucket];
            *end -= 1;
            placed += 1;
            debug_assert!(placed <= n, "bucket boundaries consumed more than n times");

            let j = *end;
            if j <= i {
                break;
            }
            std::mem::swap(&mut perm, &mut strings[j]);
            std::mem::swap(&mut perm_key, &mut cache[j]);
        }
        strings[i] = perm;
        let bucket: usize = perm_key.into();
        i += sizes[bucket];
    }
}

/// Sorts every non-empty bucket after the terminator bucket that `unfinished`
/// accepts, except the largest one, which is returned instead.
///
/// Callers continue on the returned bucket in a loop, so only buckets holding at
/// most half of the strings cost a stack frame and recursion stays logarithmic.
pub(crate) fn sort_smaller_buckets<'a, T>(
    strings: &'a mut [T],
    sizes: &[usize],
    unfinished: impl Fn(usize) -> bool,
    mut sort: impl FnMut(&mut [T]),
) -> Option<&'a mut [T]> {
    let mut largest: Option<(usize, usize)> = None;
    let mut start = sizes[0];
    for (bucket, &size) in sizes.iter().enumerate().skip(1) {
        if size != 0 && unfinished(bucket) && largest.is_none_or(|(_, len)| size > len) {
            largest = Some((start, size));
        }
        start += size;
    }

    let mut start = sizes[0];
    for (bucket, &size) in sizes.iter().enumerate().skip(1) {
        if size != 0 && unfinished(bucket) && largest != Some((start, size)) {
            sort(&mut strings[start..start + size]);
        }
        start += size;
    }

    largest.map(|(start, len)| &mut strings[start..start + len])
}
