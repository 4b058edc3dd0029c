//! Bulls and cows feedback calculation
//!
//! Feedback counts bulls (right digit, right position) and cows (digit present
//! in the secret but somewhere else). It is stored as a pair of small counters.

use super::{Digit, Sequence};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub cows: u8,
    pub bulls: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(cows: u8, bulls: u8) -> Self {
        Self { cows, bulls }
    }

    /// Feedback for a guess identical to a secret of length `num_of_digits`
    #[inline]
    #[must_use]
    pub const fn solved(num_of_digits: usize) -> Self {
        Self {
            cows: 0,
            bulls: num_of_digits as u8,
        }
    }

    /// Check if every position is a bull
    #[inline]
    #[must_use]
    pub const fn is_solved(self, num_of_digits: usize) -> bool {
        self.bulls as usize == num_of_digits
    }

    /// Calculate the feedback when `guess` is compared against `secret`
    ///
    /// Both sequences must have the same length. Since `Sequence` guarantees
    /// distinct digits, a guessed digit can match at most one secret position and
    /// `bulls + cows` never exceeds the length.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Feedback, Sequence};
    ///
    /// let secret: Sequence = "1234".parse().unwrap();
    /// let guess: Sequence = "1325".parse().unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 1));
    /// ```
    #[inline]
    #[must_use]
    pub fn evaluate(secret: &Sequence, guess: &Sequence) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "sequence lengths differ");
        Self::from_digits(secret.digits(), guess.digits())
    }

    /// Apply the bulls/cows rule to raw digit slices
    ///
    /// A cow is any non-bull guess digit that occurs anywhere in `secret`. This is
    /// the conventional rule only when digits are distinct. With repeated digits
    /// it over-counts cows, and the result is no longer symmetric in its
    /// arguments. Use [`Feedback::evaluate`] unless you need that raw behaviour.
    #[must_use]
    pub fn from_digits(secret: &[Digit], guess: &[Digit]) -> Self {
        let mut bulls = 0;
        let mut cows = 0;

        for (&g, &s) in guess.iter().zip(secret) {
            if g == s {
                bulls += 1;
            } else if secret.contains(&g) {
                cows += 1;
            }
        }

        Self { cows, bulls }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}
