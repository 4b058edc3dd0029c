//! Digit sequence representation
//!
//! A Sequence stores up to ten pairwise-distinct digits. Distinctness is checked
//! once at construction, so every other part of the crate may rely on it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single digit in the range 0-9
pub type Digit = u8;

/// Size of the digit alphabet, and therefore the longest possible sequence
pub const MAX_DIGITS: usize = 10;

/// An ordered sequence of pairwise-distinct digits
///
/// Stored inline so that copying a whole candidate pool is a flat memcpy.
/// Unused slots past `len` are always zero, which keeps derived equality and
/// hashing consistent with the visible digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence {
    digits: [Digit; MAX_DIGITS],
    len: u8,
}

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence length must be between 1 and {MAX_DIGITS}, got {0}")]
    InvalidLength(usize),
    #[error("digit {0} is outside the range 0-9")]
    DigitOutOfRange(u8),
    #[error("digit {0} appears more than once")]
    DuplicateDigit(Digit),
    #[error("'{0}' is not a decimal digit")]
    InvalidCharacter(char),
}

/// Check that `num_of_digits` fits the ten-symbol alphabet
///
/// # Errors
/// Returns `SequenceError::InvalidLength` for 0 or anything above [`MAX_DIGITS`].
pub const fn validate_length(num_of_digits: usize) -> Result<(), SequenceError> {
    if num_of_digits == 0 || num_of_digits > MAX_DIGITS {
        return Err(SequenceError::InvalidLength(num_of_digits));
    }
    Ok(())
}

impl Sequence {
    /// Create a new Sequence from a slice of digits
    ///
    /// # Errors
    /// Returns `SequenceError` if:
    /// - Length is 0 or greater than 10
    /// - Any digit is above 9
    /// - Any digit repeats
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Sequence;
    ///
    /// let seq = Sequence::new(&[0, 1, 2, 3]).unwrap();
    /// assert_eq!(seq.to_string(), "0123");
    ///
    /// assert!(Sequence::new(&[1, 1, 2, 3]).is_err());
    /// ```
    pub fn new(digits: &[Digit]) -> Result<Self, SequenceError> {
        validate_length(digits.len())?;

        let mut seen = 0u16;
        let mut stored = [0; MAX_DIGITS];
        for (slot, &digit) in stored.iter_mut().zip(digits) {
            if usize::from(digit) >= MAX_DIGITS {
                return Err(SequenceError::DigitOutOfRange(digit));
            }
            let bit = 1u16 << digit;
            if seen & bit != 0 {
                return Err(SequenceError::DuplicateDigit(digit));
            }
            seen |= bit;
            *slot = digit;
        }

        Ok(Self {
            digits: stored,
            len: digits.len() as u8,
        })
    }

    /// Build from digits already known to be distinct and below 10
    ///
    /// Slots past `len` must be zero.
    pub(super) fn from_sampled(digits: [Digit; MAX_DIGITS], len: usize) -> Self {
        debug_assert!(Self::new(&digits[..len]).is_ok());
        debug_assert!(digits[len..].iter().all(|&d| d == 0));
        Self {
            digits,
            len: len as u8,
        }
    }

    /// Get the digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.len()]
    }

    /// Number of digits in the sequence
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; a valid sequence holds at least one digit
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> Digit {
        self.digits()[position]
    }

    /// Check if the sequence contains a specific digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits().contains(&digit)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    /// Parse a digit string such as `"0123"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as Digit)
                    .ok_or(SequenceError::InvalidCharacter(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&digits)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
