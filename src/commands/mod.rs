//! Command implementations

pub mod enumerate;
pub mod simulate;
pub mod solve;

pub use enumerate::export_pool;
pub use simulate::{
    SimulationConfig, SimulationStatistics, StatisticsAccumulator, TrialFailure, TrialRecord,
    run_simulation, run_single_trial,
};
pub use solve::{SolveResult, solve_secret};
