//! Trial engine
//!
//! Plays one full game against a known secret: guess, read feedback, narrow
//! the pool, pick again, until every position is a bull.

use super::SolverError;
use super::filter::filter;
use super::policy::SelectionPolicy;
use super::pool::CandidatePool;
use crate::core::{Feedback, Sequence};
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

/// A single guess in a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Sequence,
    pub feedback: Feedback,
    /// Pool size after filtering on this guess; `None` for the winning guess
    pub remaining: Option<usize>,
}

/// Result of a solved trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    pub guesses: usize,
    pub elapsed: Duration,
    pub steps: Vec<GuessStep>,
}

enum TrialState {
    Start,
    Guessing {
        guess: Sequence,
        pool: CandidatePool,
    },
    Solved,
}

/// Consistency-filtering guesser
///
/// Owns only its policy; every trial works on its own copy of the master pool,
/// so one guesser can be shared across threads.
pub struct Guesser<P: SelectionPolicy> {
    policy: P,
    first_guess: Option<Sequence>,
}

impl<P: SelectionPolicy> Guesser<P> {
    /// Create a guesser with the given selection policy
    pub const fn new(policy: P) -> Self {
        Self {
            policy,
            first_guess: None,
        }
    }

    /// Always open with `guess` instead of asking the policy
    #[must_use]
    pub fn with_first_guess(mut self, guess: Sequence) -> Self {
        self.first_guess = Some(guess);
        self
    }

    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Opening guess for a trial on `master_pool`
    ///
    /// # Errors
    /// Returns `SolverError::UnknownGuess` if a forced opening is not in the pool,
    /// or `SolverError::EmptyPool` if the policy has nothing to choose from.
    pub fn first_guess<R: Rng + ?Sized>(
        &self,
        master_pool: &CandidatePool,
        rng: &mut R,
    ) -> Result<Sequence, SolverError> {
        match self.first_guess {
            Some(forced) if master_pool.contains(&forced) => Ok(forced),
            Some(forced) => Err(SolverError::UnknownGuess(forced)),
            None => self
                .policy
                .select(master_pool, rng)
                .copied()
                .ok_or(SolverError::EmptyPool),
        }
    }

    /// Play one trial against `secret`
    ///
    /// Terminates within `master_pool.len()` guesses because the pool strictly
    /// shrinks each round.
    ///
    /// # Errors
    /// - `SolverError::LengthMismatch` if the secret and pool lengths differ
    /// - `SolverError::InconsistentState` if filtering empties the pool, which
    ///   means the secret was not in the master pool
    /// - `SolverError::RoundLimitExceeded` if the round guard trips
    pub fn run_trial<R: Rng + ?Sized>(
        &self,
        secret: &Sequence,
        master_pool: &CandidatePool,
        rng: &mut R,
    ) -> Result<TrialOutcome, SolverError> {
        let num_of_digits = master_pool.num_of_digits();
        if secret.len() != num_of_digits {
            return Err(SolverError::LengthMismatch {
                expected: num_of_digits,
                found: secret.len(),
            });
        }

        let start = Instant::now();
        let mut steps = Vec::new();
        let mut state = TrialState::Start;

        loop {
            state = match state {
                TrialState::Start => TrialState::Guessing {
                    guess: self.first_guess(master_pool, rng)?,
                    pool: master_pool.clone(),
                },
                TrialState::Guessing { guess, pool } => {
                    let feedback = Feedback::evaluate(secret, &guess);

                    if feedback.is_solved(num_of_digits) {
                        steps.push(GuessStep {
                            guess,
                            feedback,
                            remaining: None,
                        });
                        TrialState::Solved
                    } else {
                        if steps.len() >= master_pool.len() {
                            return Err(SolverError::RoundLimitExceeded(steps.len()));
                        }

                        let pool = filter(pool, &guess, feedback)?;
                        debug!(
                            "guess {} -> {guess} {feedback}, {} candidates left",
                            steps.len() + 1,
                            pool.len()
                        );
                        steps.push(GuessStep {
                            guess,
                            feedback,
                            remaining: Some(pool.len()),
                        });

                        let next = self
                            .policy
                            .select(&pool, rng)
                            .copied()
                            .ok_or(SolverError::EmptyPool)?;
                        TrialState::Guessing { guess: next, pool }
                    }
                }
                TrialState::Solved => break,
            };
        }

        Ok(TrialOutcome {
            guesses: steps.len(),
            elapsed: start.elapsed(),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretGenerator;
    use crate::pools::enumerate;
    use crate::solver::{FirstPolicy, PolicyType, RandomPolicy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    #[test]
    fn solves_immediately_when_first_guess_is_secret() {
        let master = enumerate(4).unwrap();
        let secret = seq("1234");
        let guesser = Guesser::new(RandomPolicy).with_first_guess(secret);

        let outcome = guesser
            .run_trial(&secret, &master, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(outcome.guesses, 1);
        assert_eq!(outcome.steps[0].feedback, Feedback::solved(4));
        assert_eq!(outcome.steps[0].remaining, None);
    }

    #[test]
    fn random_guesser_solves_every_secret_it_tries() {
        let master = enumerate(4).unwrap();
        let generator = SecretGenerator::new(4).unwrap();
        let guesser = Guesser::new(RandomPolicy);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..100 {
            let secret = generator.generate(&mut rng);
            let outcome = guesser.run_trial(&secret, &master, &mut rng).unwrap();

            let last = outcome.steps.last().unwrap();
            assert_eq!(last.guess, secret);
            assert!(last.feedback.is_solved(4));
            assert_eq!(outcome.guesses, outcome.steps.len());
            assert!(outcome.guesses <= master.len());
        }
    }

    #[test]
    fn pool_strictly_shrinks_each_round() {
        let master = enumerate(4).unwrap();
        let guesser = Guesser::new(RandomPolicy);
        let mut rng = StdRng::seed_from_u64(77);

        let outcome = guesser
            .run_trial(&seq("9876"), &master, &mut rng)
            .unwrap();
        let sizes: Vec<usize> = outcome.steps.iter().filter_map(|s| s.remaining).collect();

        let mut previous = master.len();
        for size in sizes {
            assert!(size < previous);
            previous = size;
        }
    }

    #[test]
    fn guesses_are_never_repeated() {
        let master = enumerate(3).unwrap();
        let guesser = Guesser::new(RandomPolicy);
        let mut rng = StdRng::seed_from_u64(13);

        for secret in master.iter().step_by(23) {
            let outcome = guesser.run_trial(secret, &master, &mut rng).unwrap();
            let unique: rustc_hash::FxHashSet<_> =
                outcome.steps.iter().map(|s| s.guess).collect();
            assert_eq!(unique.len(), outcome.steps.len());
        }
    }

    #[test]
    fn first_policy_terminates_for_every_secret() {
        // Exhaustive termination check over the whole two-digit pool
        let master = enumerate(2).unwrap();
        let guesser = Guesser::new(FirstPolicy);
        let mut rng = StdRng::seed_from_u64(0);

        for secret in &master {
            let outcome = guesser.run_trial(secret, &master, &mut rng).unwrap();
            assert!(outcome.guesses <= master.len());
            assert_eq!(outcome.steps.last().unwrap().guess, *secret);
        }
    }

    #[test]
    fn seeded_trials_are_reproducible() {
        let master = enumerate(4).unwrap();
        let guesser = Guesser::new(PolicyType::Random);
        let secret = seq("0592");

        let a = guesser
            .run_trial(&secret, &master, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let b = guesser
            .run_trial(&secret, &master, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn secret_missing_from_pool_is_inconsistent() {
        let mut master = enumerate(3).unwrap();
        let secret = seq("123");
        master.remove(&secret);

        let guesser = Guesser::new(FirstPolicy);
        let result = guesser.run_trial(&secret, &master, &mut StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(SolverError::InconsistentState { .. })
        ));
    }

    #[test]
    fn secret_length_must_match_pool() {
        let master = enumerate(4).unwrap();
        let guesser = Guesser::new(RandomPolicy);
        let result = guesser.run_trial(&seq("123"), &master, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            result,
            Err(SolverError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn forced_first_guess_must_be_in_pool() {
        let mut master = enumerate(3).unwrap();
        let forced = seq("012");
        master.remove(&forced);

        let guesser = Guesser::new(RandomPolicy).with_first_guess(forced);
        let result = guesser.run_trial(&seq("345"), &master, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(SolverError::UnknownGuess(forced)));
    }

    #[test]
    fn forced_first_guess_is_used() {
        let master = enumerate(4).unwrap();
        let forced = seq("5678");
        let guesser = Guesser::new(RandomPolicy).with_first_guess(forced);

        let outcome = guesser
            .run_trial(&seq("0123"), &master, &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(outcome.steps[0].guess, forced);
        assert_eq!(outcome.steps[0].feedback, Feedback::new(0, 0));
        assert_eq!(outcome.steps[0].remaining, Some(360));
    }

    /// Always answers with one fixed sequence, even when it left the pool
    struct StuckPolicy(&'static Sequence);

    impl SelectionPolicy for StuckPolicy {
        fn select<'a, R: Rng + ?Sized>(
            &self,
            _pool: &'a CandidatePool,
            _rng: &mut R,
        ) -> Option<&'a Sequence> {
            Some(self.0)
        }
    }

    #[test]
    fn round_guard_stops_a_policy_that_never_converges() {
        let master = enumerate(2).unwrap();
        let stuck: &'static Sequence = Box::leak(Box::new(seq("23")));
        let guesser = Guesser::new(StuckPolicy(stuck));

        let result = guesser.run_trial(&seq("01"), &master, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(SolverError::RoundLimitExceeded(master.len())));
    }
}
