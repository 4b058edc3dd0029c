//! Core domain types for Bulls and Cows
//!
//! Sequences, feedback and secret generation. Nothing here touches I/O.

mod feedback;
mod secret;
mod sequence;

pub use feedback::Feedback;
pub use secret::SecretGenerator;
pub use sequence::{Digit, MAX_DIGITS, Sequence, SequenceError, validate_length};
