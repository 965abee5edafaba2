//! Loading lines into one buffer and writing sorted lines back out.
//!
//! The buffer is read once and never modified. Each record is a slice of it
//! without its `\n`; the terminator the sorters see is implied by the slice end.

use crate::error::{Error, Result};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::ops::Deref;
use std::path::Path;

/// Files at least this large are memory-mapped instead of read.
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Capacity of the output buffer used by the writers.
const OUTPUT_BUFFER_SIZE: usize = 192 * 1024;

/// The whole content of an input file, either mapped or owned.
/// Dereferences to `&[u8]`.
pub enum InputFile {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for InputFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputFile::Mmap(m) => m,
            InputFile::Owned(v) => v,
        }
    }
}

impl InputFile {
    /// Reads the regular file at `path` into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source: io::Error| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let metadata = file.metadata().map_err(read_err)?;
        if !metadata.is_file() {
            return Err(Error::NotRegularFile(path.to_path_buf()));
        }

        let len = metadata.len();
        if len >= MMAP_THRESHOLD {
            // SAFETY: the mapping is read-only and lives as long as the records borrowed
            // from it. Truncating the file while it is mapped is outside our control.
            let map = unsafe { MmapOptions::new().map(&file) }.map_err(read_err)?;
            tracing::debug!(path = %path.display(), len, "mapped input");
            return Ok(InputFile::Mmap(map));
        }

        let mut buf = Vec::with_capacity(len as usize);
        (&file).read_to_end(&mut buf).map_err(read_err)?;
        tracing::debug!(path = %path.display(), len = buf.len(), "read input");
        Ok(InputFile::Owned(buf))
    }

    /// Wraps bytes that are already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        InputFile::Owned(bytes)
    }
}

/// Splits `bytes` into one record per line.
///
/// Records exclude their `\n`. A final line without a trailing newline is still a
/// record; an empty buffer has none. Lines must not contain a NUL byte, since the
/// sorters treat zero as end of string.
///
/// # Examples
///
/// ```
/// use stringsort::io::split_lines;
///
/// let lines = split_lines(b"pear\n\nfig").unwrap();
/// assert_eq!(lines, vec![&b"pear"[..], &b""[..], &b"fig"[..]]);
/// ```
pub fn split_lines(bytes: &[u8]) -> Result<Vec<&[u8]>> {
    if let Some(pos) = memchr::memchr(0, bytes) {
        let line = memchr::memchr_iter(b'\n', &bytes[..pos]).count() + 1;
        return Err(Error::EmbeddedNul { line });
    }

    let mut lines = Vec::with_capacity(memchr::memchr_iter(b'\n', bytes).count() + 1);
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', bytes) {
        lines.push(&bytes[start..end]);
        start = end + 1;
    }
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }

    tracing::debug!(records = lines.len(), "split input");
    Ok(lines)
}

/// Writes `strings` in order, one per line.
pub fn write_ascending<W: Write, T: AsRef<[u8]>>(out: W, strings: &[T]) -> io::Result<()> {
    write_lines(out, strings.iter())
}

/// Writes `strings` in reverse order, one per line.
pub fn write_descending<W: Write, T: AsRef<[u8]>>(out: W, strings: &[T]) -> io::Result<()> {
    write_lines(out, strings.iter().rev())
}

fn write_lines<'a, W, T, I>(out: W, lines: I) -> io::Result<()>
where
    W: Write,
    T: AsRef<[u8]> + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut out = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, out);
    for line in lines {
        out.write_all(line.as_ref())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
