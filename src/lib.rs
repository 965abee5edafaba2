//! # Stringsort
//!
//! `stringsort` sorts large in-memory collections of byte strings (typically one per
//! input line) into byte-lexicographic order. It offers several interchangeable
//! strategies that avoid re-comparing bytes already known to be equal and keep
//! their working set cache friendly.
//!
//! ## Strategies
//!
//! - [`multikey_quicksort`]: ternary partitioning on one byte at a time; the equal
//!   partition continues one byte deeper.
//! - [`mergesort`]: stable top-down mergesort whose merge walks skip a fixed common prefix.
//! - [`msd_radix_sort`] / [`msd_radix_sort_16`]: most-significant-digit radix sort on
//!   one or two bytes per step with in-place cyclic permutation.
//! - [`oracle_radix_sort`]: the same radix sort with oracle-based in-place distribution.
//!
//! All of them share one contract: `sort(strings, depth)` reorders the slice of string
//! references ascending in place, never touching the bytes themselves. [`Algorithm`]
//! selects one at runtime.
//!
//! ## String model
//!
//! A string is any `Copy` handle that exposes bytes through `AsRef<[u8]>`, such as
//! `&[u8]` or `&str`. The end of a string acts as a zero terminator that sorts below
//! every other byte, so a strict prefix orders before its extension. Strings must not
//! contain a zero byte themselves; [`io::split_lines`] rejects such input.
//!
//! ## Usage
//!
//! ```rust
//! use stringsort::Algorithm;
//!
//! let mut data = vec!["banana", "apple", "band", "ban"];
//! Algorithm::MsdRadix.sort(&mut data, 0);
//!
//! assert_eq!(data, vec!["apple", "ban", "banana", "band"]);
//! ```
//!
//! ### Skipping a shared prefix
//!
//! When every string is known to start with the same `k` bytes, pass `k` as the
//! start depth and those bytes are never inspected:
//!
//! ```rust
//! use stringsort::multikey_quicksort;
//!
//! let mut data = vec!["|pear", "|apple", "|fig"];
//! multikey_quicksort(&mut data, 1);
//!
//! assert_eq!(data, vec!["|apple", "|fig", "|pear"]);
//! ```
//!
//! ## Memory
//!
//! Sorting allocates only call-scoped scratch space: one pointer array for
//! [`mergesort`], one byte (or two for [`msd_radix_sort_16`]) per string plus fixed
//! bucket tables for the radix family. Failing to allocate it aborts the process.

pub mod algo;
pub mod check;
pub mod core;
pub mod error;
pub mod io;

pub use crate::algo::{
    ALL_ALGORITHMS, Algorithm, mergesort, msd_radix_sort, msd_radix_sort_16, multikey_quicksort,
    oracle_radix_sort,
};
pub use crate::core::{compare, insertion_sort};
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::algo::{
        ALL_ALGORITHMS, Algorithm, mergesort, msd_radix_sort, msd_radix_sort_16,
        multikey_quicksort, oracle_radix_sort,
    };
    pub use crate::check::{is_sorted, verify_sorted};
    pub use crate::core::{compare, insertion_sort};
    pub use crate::io::{InputFile, split_lines, write_ascending, write_descending};
}
