//! Guessing engine
//!
//! Candidate pool, consistency filter, selection policies and the trial loop.

mod engine;
mod filter;
pub mod policy;
pub mod pool;

use crate::core::{Feedback, Sequence};
use thiserror::Error;

pub use engine::{GuessStep, Guesser, TrialOutcome};
pub use filter::filter;
pub use policy::{FirstPolicy, PolicyType, RandomPolicy, SelectionPolicy};
pub use pool::{CandidatePool, PoolError};

/// Errors that abort a single trial
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("inconsistent state: no candidate is consistent with {guess} scoring {feedback}")]
    InconsistentState { guess: Sequence, feedback: Feedback },
    #[error("no candidates to choose a guess from")]
    EmptyPool,
    #[error("secret has {found} digits but the pool holds {expected}-digit sequences")]
    LengthMismatch { expected: usize, found: usize },
    #[error("first guess {0} is not in the candidate pool")]
    UnknownGuess(Sequence),
    #[error("trial did not finish within {0} guesses")]
    RoundLimitExceeded(usize),
}
