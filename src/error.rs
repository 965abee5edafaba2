//! Error type for the loading, checking and writing around a sort.
//!
//! The sorting algorithms themselves never fail: scratch allocation failure aborts
//! the process (see [`crate::core`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not a regular file")]
    NotRegularFile(PathBuf),

    #[error("line {line} contains a NUL byte")]
    EmbeddedNul { line: usize },

    #[error("unknown algorithm '{0}' (expected one of: mkqs, merge, radix, radix16, oracle)")]
    UnknownAlgorithm(String),

    #[error("output is not sorted at position {index}")]
    Unsorted { index: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
