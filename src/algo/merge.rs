//! Depth-aware top-down mergesort.

use crate::core::{compare, insertion_sort, scratch_copy};
use std::cmp::Ordering;

/// Runs shorter than this are insertion sorted in their destination array.
const INSERTION_THRESHOLD: usize = 64;

/// Sorts `strings` ascending with a stable mergesort, skipping the first `depth` bytes.
///
/// `depth` stays fixed for the whole call; seed it with the length of a prefix that
/// every input shares. One auxiliary array of `strings.len()` references is allocated
/// for the duration of the call.
///
/// # Examples
///
/// ```
/// use stringsort::mergesort;
///
/// let mut data = vec!["#pear", "#fig", "#apple"];
/// mergesort(&mut data, 1);
///
/// assert_eq!(data, vec!["#apple", "#fig", "#pear"]);
/// ```
pub fn mergesort<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) {
    if strings.len() < INSERTION_THRESHOLD {
        insertion_sort(strings, depth);
        return;
    }

    let mut aux = scratch_copy(strings);
    sort_into(strings, &mut aux, depth);
}

/// Leaves the sorted contents of `dst` in `dst`.
///
/// On entry `dst` and `src` hold the same elements in the same order. The halves
/// are sorted into `src` (roles swapped) and then merged back into `dst`.
fn sort_into<T: AsRef<[u8]> + Copy>(dst: &mut [T], src: &mut [T], depth: usize) {
    let n = dst.len();
    if n < INSERTION_THRESHOLD {
        insertion_sort(dst, depth);
        return;
    }

    let mid = n / 2;
    {
        let (dst_lo, dst_hi) = dst.split_at_mut(mid);
        let (src_lo, src_hi) = src.split_at_mut(mid);
        sort_into(src_lo, dst_lo, depth);
        sort_into(src_hi, dst_hi, depth);
    }
    merge(src, mid, dst, depth);
}

/// Merges the sorted runs `src[..mid]` and `src[mid..]` into `dst`.
fn merge<T: AsRef<[u8]> + Copy>(src: &[T], mid: usize, dst: &mut [T], depth: usize) {
    let (left, right) = src.split_at(mid);
    let (mut i, mut j) = (0, 0);

    for slot in dst.iter_mut() {
        let take_right = if i == left.len() {
            true
        } else if j == right.len() {
            false
        } else {
            // Ties go left to keep equal keys in input order.
            compare(right[j].as_ref(), left[i].as_ref(), depth) == Ordering::Less
        };

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}
