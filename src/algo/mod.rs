//! Sorting strategies.
//!
//! Every strategy has the same contract: `fn(strings: &mut [T], depth: usize)`
//! reorders `strings` ascending in place, treating the first `depth` bytes of every
//! string as already known to be equal. [`Algorithm`] picks one at runtime.

mod merge;
mod mkqs;
mod oracle;
mod radix;

pub use merge::mergesort;
pub use mkqs::multikey_quicksort;
pub use oracle::oracle_radix_sort;
pub use radix::{msd_radix_sort, msd_radix_sort_16};

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A string sorting strategy.
///
/// # Examples
///
/// ```
/// use stringsort::{ALL_ALGORITHMS, Algorithm};
///
/// for algorithm in ALL_ALGORITHMS {
///     let mut data = vec!["banana", "apple", "band", "ban"];
///     algorithm.sort(&mut data, 0);
///     assert_eq!(data, vec!["apple", "ban", "banana", "band"]);
/// }
///
/// let algorithm: Algorithm = "radix16".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::MsdRadix16);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Ternary-split multikey quicksort. See [`multikey_quicksort`].
    #[default]
    MultikeyQuicksort,
    /// Stable top-down mergesort with a fixed depth. See [`mergesort`].
    Mergesort,
    /// One-byte MSD radix sort. See [`msd_radix_sort`].
    MsdRadix,
    /// Two-byte MSD radix sort. See [`msd_radix_sort_16`].
    MsdRadix16,
    /// One-byte MSD radix sort with oracle distribution. See [`oracle_radix_sort`].
    Oracle,
}

/// Every algorithm, in the order the CLI lists them.
pub const ALL_ALGORITHMS: [Algorithm; 5] = [
    Algorithm::MultikeyQuicksort,
    Algorithm::Mergesort,
    Algorithm::MsdRadix,
    Algorithm::MsdRadix16,
    Algorithm::Oracle,
];

impl Algorithm {
    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MultikeyQuicksort => "mkqs",
            Algorithm::Mergesort => "merge",
            Algorithm::MsdRadix => "radix",
            Algorithm::MsdRadix16 => "radix16",
            Algorithm::Oracle => "oracle",
        }
    }

    /// Sorts `strings` ascending in place.
    ///
    /// `start_depth` is the number of leading bytes every string shares and that
    /// should not be inspected, e.g. `1` when each line starts with the same marker.
    pub fn sort<T: AsRef<[u8]> + Copy>(self, strings: &mut [T], start_depth: usize) {
        tracing::debug!(algorithm = self.name(), len = strings.len(), start_depth, "sorting");
        if strings.len() < 2 {
            return;
        }
        match self {
            Algorithm::MultikeyQuicksort => multikey_quicksort(strings, start_depth),
            Algorithm::Mergesort => mergesort(strings, start_depth),
            Algorithm::MsdRadix => msd_radix_sort(strings, start_depth),
            Algorithm::MsdRadix16 => msd_radix_sort_16(strings, start_depth),
            Algorithm::Oracle => oracle_radix_sort(strings, start_depth),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ALGORITHMS
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
