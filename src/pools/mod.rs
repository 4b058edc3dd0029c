//! Candidate pools for Bulls and Cows
//!
//! Builds the full pool of distinct-digit sequences, or loads a persisted one.

pub mod loader;

use crate::core::{Digit, MAX_DIGITS, Sequence, SequenceError, validate_length};
use crate::solver::{CandidatePool, PoolError};

/// Number of ordered sequences of `num_of_digits` distinct digits: 10! / (10 - n)!
#[must_use]
pub fn permutation_count(num_of_digits: usize) -> usize {
    (MAX_DIGITS + 1 - num_of_digits.min(MAX_DIGITS)..=MAX_DIGITS).product()
}

/// Enumerate every valid sequence of `num_of_digits` digits in lexicographic order
///
/// # Errors
/// Returns `PoolError::Sequence` if `num_of_digits` is 0 or above 10.
///
/// # Examples
/// ```
/// use bulls_and_cows::pools::enumerate;
///
/// let pool = enumerate(4).unwrap();
/// assert_eq!(pool.len(), 5040);
/// assert_eq!(pool.as_slice()[0].to_string(), "0123");
/// ```
pub fn enumerate(num_of_digits: usize) -> Result<CandidatePool, PoolError> {
    validate_length(num_of_digits)?;

    let mut members = Vec::with_capacity(permutation_count(num_of_digits));
    let mut prefix = Vec::with_capacity(num_of_digits);
    extend(&mut prefix, 0, num_of_digits, &mut members)?;

    CandidatePool::new(members)
}

fn extend(
    prefix: &mut Vec<Digit>,
    used: u16,
    num_of_digits: usize,
    out: &mut Vec<Sequence>,
) -> Result<(), SequenceError> {
    if prefix.len() == num_of_digits {
        out.push(Sequence::new(prefix)?);
        return Ok(());
    }

    for digit in 0..MAX_DIGITS as Digit {
        let bit = 1u16 << digit;
        if used & bit == 0 {
            prefix.push(digit);
            extend(prefix, used | bit, num_of_digits, out)?;
            prefix.pop();
        }
    }
    Ok(())
}
