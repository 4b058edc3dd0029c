//! Bulls and Cows simulator
//!
//! Measures how many guesses a naive consistency-filtering guesser needs to
//! break a secret of distinct digits.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Feedback, Sequence};
//! use bulls_and_cows::pools::enumerate;
//! use bulls_and_cows::solver::{Guesser, RandomPolicy};
//! use rand::SeedableRng;
//!
//! let secret: Sequence = "1234".parse().unwrap();
//! let guess: Sequence = "1325".parse().unwrap();
//! assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 1));
//!
//! let pool = enumerate(4).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let outcome = Guesser::new(RandomPolicy)
//!     .run_trial(&secret, &pool, &mut rng)
//!     .unwrap();
//! println!("Solved in {} guesses", outcome.guesses);
//! ```

// Core domain types
pub mod core;

// Guessing engine
pub mod solver;

// Pool enumeration and persistence
pub mod pools;

// Settings file and validation
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
