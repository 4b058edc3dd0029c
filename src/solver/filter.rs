//! Candidate consistency filter

use super::SolverError;
use super::pool::CandidatePool;
use crate::core::{Feedback, Sequence};

/// Narrow `pool` to the candidates consistent with `guess` receiving `feedback`
///
/// The guess itself is removed first, since it is never reissued. A remaining
/// candidate `s` survives when `Feedback::evaluate(guess, s) == feedback`, that
/// is, when it would have answered the guess exactly as the secret did.
///
/// # Errors
/// - `SolverError::LengthMismatch` if the guess length differs from the pool's
/// - `SolverError::InconsistentState` if no candidate survives. With a secret
///   drawn from the pool this cannot happen.
pub fn filter(
    mut pool: CandidatePool,
    guess: &Sequence,
    feedback: Feedback,
) -> Result<CandidatePool, SolverError> {
    if guess.len() != pool.num_of_digits() {
        return Err(SolverError::LengthMismatch {
            expected: pool.num_of_digits(),
            found: guess.len(),
        });
    }

    pool.remove(guess);
    pool.retain(|candidate| Feedback::evaluate(guess, candidate) == feedback);

    if pool.is_empty() {
        return Err(SolverError::InconsistentState {
            guess: *guess,
            feedback,
        });
    }

    Ok(pool)
}
