//! Pool export command

use crate::pools::enumerate;
use crate::pools::loader::{PoolFileError, save_to_file};
use std::path::Path;

/// Write the full pool of `num_of_digits`-long sequences to `path`
///
/// Returns the number of sequences written.
///
/// # Errors
///
/// Returns `PoolFileError` if `num_of_digits` is invalid or the file cannot be
/// written.
pub fn export_pool<P: AsRef<Path>>(num_of_digits: usize, path: P) -> Result<usize, PoolFileError> {
    let pool = enumerate(num_of_digits)?;
    save_to_file(path, &pool)?;
    Ok(pool.len())
}
