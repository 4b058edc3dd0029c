//! Single-secret solving command
//!
//! Plays one trial against a chosen (or random) secret and keeps the full trace.

use crate::core::{SecretGenerator, Sequence};
use crate::solver::{CandidatePool, Guesser, SelectionPolicy, SolverError, TrialOutcome};
use rand::Rng;

/// Result of solving one secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Sequence,
    pub initial_candidates: usize,
    pub outcome: TrialOutcome,
}

/// Solve `secret`, or a freshly generated one when `None`
///
/// # Errors
///
/// Returns `SolverError` if the trial aborts, for example when the secret is not
/// part of `master_pool`.
pub fn solve_secret<P: SelectionPolicy, R: Rng + ?Sized>(
    guesser: &Guesser<P>,
    generator: &SecretGenerator,
    master_pool: &CandidatePool,
    secret: Option<Sequence>,
    rng: &mut R,
) -> Result<SolveResult, SolverError> {
    let secret = secret.unwrap_or_else(|| generator.generate(rng));
    let outcome = guesser.run_trial(&secret, master_pool, rng)?;

    Ok(SolveResult {
        secret,
        initial_candidates: master_pool.len(),
        outcome,
    })
}
