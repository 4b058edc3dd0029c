//! Secret generation

use super::sequence::{Digit, MAX_DIGITS, Sequence, SequenceError, validate_length};
use rand::Rng;
use rand::seq::index;

/// Produces uniformly random secrets of a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretGenerator {
    num_of_digits: usize,
}

impl SecretGenerator {
    /// Create a generator for secrets of `num_of_digits` digits
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` if `num_of_digits` is 0 or above 10.
    pub fn new(num_of_digits: usize) -> Result<Self, SequenceError> {
        validate_length(num_of_digits)?;
        Ok(Self { num_of_digits })
    }

    /// Length of every generated secret
    #[inline]
    #[must_use]
    pub const fn num_of_digits(&self) -> usize {
        self.num_of_digits
    }

    /// Draw a secret by sampling digits without replacement
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Sequence {
        let mut digits = [0 as Digit; MAX_DIGITS];
        let picked = index::sample(rng, MAX_DIGITS, self.num_of_digits);
        for (slot, digit) in digits.iter_mut().zip(picked) {
            *slot = digit as Digit;
        }
        Sequence::from_sampled(digits, self.num_of_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generator_rejects_bad_lengths() {
        assert_eq!(
            SecretGenerator::new(0),
            Err(SequenceError::InvalidLength(0))
        );
        assert_eq!(
            SecretGenerator::new(11),
            Err(SequenceError::InvalidLength(11))
        );
    }

    #[test]
    fn generated_secrets_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=MAX_DIGITS {
            let generator = SecretGenerator::new(n).unwrap();
            for _ in 0..200 {
                let secret = generator.generate(&mut rng);
                assert_eq!(secret.len(), n);

                let mut seen = [false; MAX_DIGITS];
                for &d in secret.digits() {
                    assert!(!seen[usize::from(d)], "repeat in {secret}");
                    seen[usize::from(d)] = true;
                }
            }
        }
    }

    #[test]
    fn generator_is_reproducible_with_seed() {
        let generator = SecretGenerator::new(4).unwrap();
        let a = generator.generate(&mut StdRng::seed_from_u64(42));
        let b = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn generator_uses_zero_in_any_position() {
        let generator = SecretGenerator::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut zero_positions = [false; 4];
        for _ in 0..2000 {
            let secret = generator.generate(&mut rng);
            if let Some(pos) = secret.digits().iter().position(|&d| d == 0) {
                zero_positions[pos] = true;
            }
        }
        assert!(zero_positions.iter().all(|&hit| hit));
    }
}
