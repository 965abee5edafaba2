//! Core string model shared by every sorting strategy.
//!
//! This module defines:
//! - The terminator convention and the depth-aware [`compare`] walk.
//! - [`insertion_sort`]: The small-array base case all algorithms fall back to.
//! - Scratch allocation for the per-call oracle and bucket tables.

use std::alloc::Layout;
use std::cmp::Ordering;

/// Byte value marking the end of a string. Sorts below every other byte.
pub const TERMINATOR: u8 = 0;

/// Returns the byte of `key` at `depth`, or [`TERMINATOR`] past its end.
///
/// References never store their terminator; reading beyond the last byte
/// behaves as if a zero byte followed the content.
#[inline(always)]
pub fn char_at(key: &[u8], depth: usize) -> u8 {
    match key.get(depth) {
        Some(&byte) => byte,
        None => TERMINATOR,
    }
}

/// Compares two strings, ignoring the first `depth` bytes.
///
/// The caller asserts that both strings agree on `[0, depth)`. The walk stops at
/// the first differing byte or at the terminator, so a strict prefix orders before
/// its extension (`"ab" < "abc"`).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use stringsort::compare;
///
/// assert_eq!(compare(b"ban", b"banana", 0), Ordering::Less);
/// assert_eq!(compare(b"band", b"banana", 3), Ordering::Greater);
/// assert_eq!(compare(b"apple", b"apple", 2), Ordering::Equal);
/// ```
#[inline(always)]
pub fn compare(a: &[u8], b: &[u8], depth: usize) -> Ordering {
    let mut d = depth;
    loop {
        let ca = char_at(a, d);
        let cb = char_at(b, d);
        if ca != cb || ca == TERMINATOR {
            return ca.cmp(&cb);
        }
        d += 1;
    }
}

/// Depth-aware insertion sort.
///
/// Used for every sub-problem below an algorithm's cut-off. Elements only move past
/// strictly greater neighbours, so equal strings keep their relative order.
pub fn insertion_sort<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) {
    for i in 1..strings.len() {
        let tmp = strings[i];
        let mut j = i;
        while j > 0
            && compare(strings[j - 1].as_ref(), tmp.as_ref(), depth) == Ordering::Greater
        {
            strings[j] = strings[j - 1];
            j -= 1;
        }
        strings[j] = tmp;
    }
}

/// Allocates an empty vector able to hold `len` values without reallocating.
///
/// Running out of memory here is unrecoverable: there is no degraded sort path,
/// so the process aborts with a diagnostic instead of unwinding.
pub(crate) fn scratch<V>(len: usize) -> Vec<V> {
    let mut buf = Vec::new();
    if let Err(err) = buf.try_reserve_exact(len) {
        tracing::error!(len, %err, "could not allocate sort scratch space");
        let layout = Layout::array::<V>(len).unwrap_or_else(|_| Layout::new::<V>());
        std::alloc::handle_alloc_error(layout);
    }
    buf
}

/// Copies `src` into a freshly allocated scratch buffer.
pub(crate) fn scratch_copy<V: Copy>(src: &[V]) -> Vec<V> {
    let mut buf = scratch(src.len());
    buf.extend_from_slice(src);
    buf
}
