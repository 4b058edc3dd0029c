//! Simulation command
//!
//! Runs many independent trials in parallel and reduces their results into
//! guess-count and timing statistics.

use crate::core::{SecretGenerator, Sequence};
use crate::solver::{CandidatePool, Guesser, SelectionPolicy, SolverError, TrialOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub num_of_trials: usize,
    /// Trial `i` draws from a generator seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Everything one trial produced
#[derive(Debug, Clone)]
pub struct TrialRecord {
    pub index: usize,
    pub secret: Sequence,
    pub result: Result<TrialOutcome, SolverError>,
}

/// A trial that aborted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFailure {
    pub index: usize,
    pub secret: Sequence,
    pub error: SolverError,
}

/// Per-thread partial statistics, merged after all trials finish
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator {
    solved: usize,
    total_guesses: usize,
    min_guesses: Option<usize>,
    max_guesses: usize,
    distribution: BTreeMap<usize, usize>,
    total_trial_time: Duration,
    failures: Vec<TrialFailure>,
}

impl StatisticsAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial into the totals
    pub fn record(&mut self, record: TrialRecord) {
        match record.result {
            Ok(outcome) => {
                self.solved += 1;
                self.total_guesses += outcome.guesses;
                self.min_guesses = Some(
                    self.min_guesses
                        .map_or(outcome.guesses, |m| m.min(outcome.guesses)),
                );
                self.max_guesses = self.max_guesses.max(outcome.guesses);
                *self.distribution.entry(outcome.guesses).or_insert(0) += 1;
                self.total_trial_time += outcome.elapsed;
            }
            Err(error) => self.failures.push(TrialFailure {
                index: record.index,
                secret: record.secret,
                error,
            }),
        }
    }

    /// Combine with another partial result
    pub fn merge(&mut self, other: Self) {
        self.solved += other.solved;
        self.total_guesses += other.total_guesses;
        self.min_guesses = match (self.min_guesses, other.min_guesses) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_guesses = self.max_guesses.max(other.max_guesses);
        for (guesses, count) in other.distribution {
            *self.distribution.entry(guesses).or_insert(0) += count;
        }
        self.total_trial_time += other.total_trial_time;
        self.failures.extend(other.failures);
    }

    /// Produce final statistics
    ///
    /// Averages cover solved trials only; failed trials are listed separately.
    #[must_use]
    pub fn finish(mut self, wall_time: Duration) -> SimulationStatistics {
        self.failures.sort_by_key(|f| f.index);
        let total_trials = self.solved + self.failures.len();

        let (average_guesses, average_trial_time) = if self.solved > 0 {
            (
                self.total_guesses as f64 / self.solved as f64,
                self.total_trial_time / u32::try_from(self.solved).unwrap_or(u32::MAX),
            )
        } else {
            (0.0, Duration::ZERO)
        };

        let seconds = wall_time.as_secs_f64();
        let trials_per_second = if seconds > 0.0 {
            total_trials as f64 / seconds
        } else {
            0.0
        };

        SimulationStatistics {
            total_trials,
            solved: self.solved,
            failures: self.failures,
            total_guesses: self.total_guesses,
            average_guesses,
            min_guesses: self.min_guesses.unwrap_or(0),
            max_guesses: self.max_guesses,
            distribution: self.distribution,
            total_trial_time: self.total_trial_time,
            average_trial_time,
            wall_time,
            trials_per_second,
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub total_trials: usize,
    pub solved: usize,
    pub failures: Vec<TrialFailure>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Sum of per-trial solve times
    pub total_trial_time: Duration,
    pub average_trial_time: Duration,
    pub wall_time: Duration,
    pub trials_per_second: f64,
}

impl SimulationStatistics {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Play trial number `index` with its own seeded generator
pub fn run_single_trial<P: SelectionPolicy>(
    guesser: &Guesser<P>,
    generator: &SecretGenerator,
    master_pool: &CandidatePool,
    seed: u64,
    index: usize,
) -> TrialRecord {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
    let secret = generator.generate(&mut rng);
    let result = guesser.run_trial(&secret, master_pool, &mut rng);

    if let Err(e) = &result {
        warn!("trial {index} (secret {secret}) failed: {e}");
    }

    TrialRecord {
        index,
        secret,
        result,
    }
}

/// Run `config.num_of_trials` trials on the current rayon pool
///
/// Each trial owns its copy of the pool and its own RNG, so results for a given
/// seed do not depend on the number of threads.
pub fn run_simulation<P: SelectionPolicy + Sync>(
    guesser: &Guesser<P>,
    generator: &SecretGenerator,
    master_pool: &CandidatePool,
    config: &SimulationConfig,
) -> SimulationStatistics {
    let pb = if config.show_progress {
        ProgressBar::new(config.num_of_trials as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let accumulator = (0..config.num_of_trials)
        .into_par_iter()
        .map(|index| {
            let record = run_single_trial(guesser, generator, master_pool, config.seed, index);
            pb.inc(1);
            record
        })
        .fold(StatisticsAccumulator::new, |mut acc, record| {
            acc.record(record);
            acc
        })
        .reduce(StatisticsAccumulator::new, |mut a, b| {
            a.merge(b);
            a
        });

    pb.finish_and_clear();

    accumulator.finish(start.elapsed())
}
