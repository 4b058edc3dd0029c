//! Pool file loading and saving
//!
//! A pool file holds one digit string per line, such as `0123`. Blank lines and
//! lines starting with `#` are ignored.

use crate::core::{Sequence, SequenceError};
use crate::solver::{CandidatePool, PoolError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing a pool file
#[derive(Debug, Error)]
pub enum PoolFileError {
    #[error("failed to access pool file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: SequenceError,
    },
    #[error("line {line}: {sequence} has {found} digits, expected {expected}")]
    LengthMismatch {
        line: usize,
        sequence: Sequence,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Load a pool of `num_of_digits`-long sequences from a file
///
/// # Errors
///
/// Returns `PoolFileError` if the file cannot be read, a line is not a valid
/// sequence of the expected length, or the pool contains duplicates or nothing.
///
/// # Examples
/// ```no_run
/// use bulls_and_cows::pools::loader::load_from_file;
///
/// let pool = load_from_file("digits.txt", 4).unwrap();
/// println!("Loaded {} sequences", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    num_of_digits: usize,
) -> Result<CandidatePool, PoolFileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PoolFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pool(&content, num_of_digits)
}

/// Parse pool file contents
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O failures.
pub fn parse_pool(content: &str, num_of_digits: usize) -> Result<CandidatePool, PoolFileError> {
    let mut members = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let sequence: Sequence = trimmed
            .parse()
            .map_err(|source| PoolFileError::InvalidEntry { line, source })?;
        if sequence.len() != num_of_digits {
            return Err(PoolFileError::LengthMismatch {
                line,
                sequence,
                expected: num_of_digits,
                found: sequence.len(),
            });
        }
        members.push(sequence);
    }

    Ok(CandidatePool::new(members)?)
}

/// Write a pool to a file, one sequence per line
///
/// # Errors
///
/// Returns `PoolFileError::Io` if the file cannot be created or written.
pub fn save_to_file<P: AsRef<Path>>(path: P, pool: &CandidatePool) -> Result<(), PoolFileError> {
    let path = path.as_ref();
    let io_error = |source| PoolFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for sequence in pool {
        writeln!(writer, "{sequence}").map_err(io_error)?;
    }
    writer.flush().map_err(io_error)
}
