//! Formatting utilities for terminal output

use crate::core::Feedback;
use std::time::Duration;

/// Format feedback as pegs: one filled per bull, one hollow per cow
///
/// Positions that scored neither are shown as dots.
#[must_use]
pub fn feedback_pegs(feedback: Feedback, num_of_digits: usize) -> String {
    let bulls = usize::from(feedback.bulls);
    let cows = usize::from(feedback.cows);
    let misses = num_of_digits.saturating_sub(bulls + cows);

    format!("{}{}{}", "●".repeat(bulls), "○".repeat(cows), "·".repeat(misses))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration in seconds with four decimals
#[must_use]
pub fn seconds(duration: Duration) -> String {
    format!("{:.4}", duration.as_secs_f64())
}
