//! Multikey quicksort (Bentley & Sedgewick, "Fast algorithms for sorting and
//! searching strings", SODA 1997).
//!
//! Partitions on a single byte at the current depth into `<`, `=` and `>` runs.
//! The outer runs recurse at the same depth; the middle run is sorted one byte
//! deeper in the same call.

use crate::core::{TERMINATOR, char_at, insertion_sort};

/// Sub-problems smaller than this are handed to insertion sort.
const INSERTION_THRESHOLD: usize = 20;

/// Above this size the pivot is a pseudomedian of 9 instead of a median of 3.
const NINTHER_THRESHOLD: usize = 30;

/// Sorts `strings` ascending, assuming all of them share their first `depth` bytes.
///
/// # Examples
///
/// ```
/// use stringsort::multikey_quicksort;
///
/// let mut data = vec!["banana", "apple", "band", "ban"];
/// multikey_quicksort(&mut data, 0);
///
/// assert_eq!(data, vec!["apple", "ban", "banana", "band"]);
/// ```
pub fn multikey_quicksort<T: AsRef<[u8]> + Copy>(mut strings: &mut [T], mut depth: usize) {
    // The equal run continues in this loop, so long shared prefixes cost no stack.
    loop {
        let n = strings.len();
        if n < INSERTION_THRESHOLD {
            insertion_sort(strings, depth);
            return;
        }

        let equal_run = partition(strings, depth);
        let (less, equal, pivot) = (equal_run.start, equal_run.len(), equal_run.pivot);
        let greater = n - less - equal;

        if less > 1 {
            multikey_quicksort(&mut strings[..less], depth);
        }
        if greater > 1 {
            multikey_quicksort(&mut strings[n - greater..], depth);
        }
        // Equal run on the terminator holds identical strings.
        if pivot == TERMINATOR {
            return;
        }
        let current = std::mem::take(&mut strings);
        strings = &mut current[less..less + equal];
        depth += 1;
    }
}

/// Position of the strings equal to the pivot byte after [`partition`].
struct EqualRun {
    start: usize,
    end: usize,
    pivot: u8,
}

impl EqualRun {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Ternary partition on the byte at `depth`: `<` run, `=` run, `>` run.
fn partition<T: AsRef<[u8]> + Copy>(strings: &mut [T], depth: usize) -> EqualRun {
    let n = strings.len();

    let pivot_index = choose_pivot(strings, depth);
    strings.swap(0, pivot_index);
    let pivot = byte(strings, 0, depth);

    // Layout during the scan:
    // [0, a) == pivot | [a, b) < pivot | [b, c] unseen | (c, d] > pivot | (d, n) == pivot
    let (mut a, mut b) = (1, 1);
    let (mut c, mut d) = (n - 1, n - 1);
    loop {
        while b <= c {
            let ch = byte(strings, b, depth);
            if ch > pivot {
                break;
            }
            if ch == pivot {
                strings.swap(a, b);
                a += 1;
            }
            b += 1;
        }
        while b <= c {
            let ch = byte(strings, c, depth);
            if ch < pivot {
                break;
            }
            if ch == pivot {
                strings.swap(c, d);
                d -= 1;
            }
            c -= 1;
        }
        if b > c {
            break;
        }
        strings.swap(b, c);
        b += 1;
        c -= 1;
    }

    // Bring both equal runs next to each other in the middle.
    let r = a.min(b - a);
    swap_ranges(strings, 0, b - r, r);
    let r = (d - c).min(n - d - 1);
    swap_ranges(strings, b, n - r, r);

    let less = b - a;
    let greater = d - c;
    EqualRun {
        start: less,
        end: n - greater,
        pivot,
    }
}

#[inline(always)]
fn byte<T: AsRef<[u8]>>(strings: &[T], index: usize, depth: usize) -> u8 {
    char_at(strings[index].as_ref(), depth)
}

/// Median of 3 for mid-sized inputs, pseudomedian of 9 above [`NINTHER_THRESHOLD`].
fn choose_pivot<T: AsRef<[u8]>>(strings: &[T], depth: usize) -> usize {
    let n = strings.len();
    let mut lo = 0;
    let mut mid = n / 2;
    let mut hi = n - 1;

    if n > NINTHER_THRESHOLD {
        let step = n / 8;
        lo = median_of_three(strings, lo, lo + step, lo + 2 * step, depth);
        mid = median_of_three(strings, mid - step, mid, mid + step, depth);
        hi = median_of_three(strings, hi - 2 * step, hi - step, hi, depth);
    }

    median_of_three(strings, lo, mid, hi, depth)
}

fn median_of_three<T: AsRef<[u8]>>(
    strings: &[T],
    a: usize,
    b: usize,
    c: usize,
    depth: usize,
) -> usize {
    let va = byte(strings, a, depth);
    let vb = byte(strings, b, depth);
    if va == vb {
        return a;
    }
    let vc = byte(strings, c, depth);
    if vc == va || vc == vb {
        return c;
    }
    if va < vb {
        if vb < vc {
            b
        } else if va < vc {
            c
        } else {
            a
        }
    } else if vb > vc {
        b
    } else if va < vc {
        a
    } else {
        c
    }
}

/// Swaps `strings[x..x + len]` with `strings[y..y + len]` element by element.
fn swap_ranges<T>(strings: &mut [T], x: usize, y: usize, len: usize) {
    for k in 0..len {
        strings.swap(x + k, y + k);
    }
}
