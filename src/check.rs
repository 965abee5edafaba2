//! Post-sort correctness check.

use crate::core::compare;
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Checks that every adjacent pair of `strings` is in ascending byte order.
///
/// Returns [`Error::Unsorted`] with the index of the first element that is greater
/// than its successor.
pub fn verify_sorted<T: AsRef<[u8]>>(strings: &[T]) -> Result<()> {
    match strings
        .windows(2)
        .position(|pair| compare(pair[0].as_ref(), pair[1].as_ref(), 0) == Ordering::Greater)
    {
        Some(index) => Err(Error::Unsorted { index }),
        None => Ok(()),
    }
}

/// Returns `true` when [`verify_sorted`] finds no out-of-order pair.
pub fn is_sorted<T: AsRef<[u8]>>(strings: &[T]) -> bool {
    verify_sorted(strings).is_ok()
}
