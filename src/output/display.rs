//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, seconds};
use crate::commands::{SimulationStatistics, SolveResult};
use colored::Colorize;

/// Print the result of solving one secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let num_of_digits = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut before = result.initial_candidates;
    for (i, step) in result.outcome.steps.iter().enumerate() {
        println!(
            "\nGuess {}: {} {} {}",
            i + 1,
            step.guess.to_string().bold(),
            feedback_pegs(step.feedback, num_of_digits),
            step.feedback
        );

        if verbose && let Some(after) = step.remaining {
            println!("  Candidates: {before} → {after}");
            let reduction = before as f64 / after as f64;
            println!(
                "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                reduction.log2()
            );
            before = after;
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} guesses ({}s)",
            result.outcome.guesses,
            seconds(result.outcome.elapsed)
        )
        .green()
        .bold()
    );
}

/// Print aggregated simulation statistics
pub fn print_simulation_result(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nnum = {:.4}, time per round = {}, total time = {}",
        stats.average_guesses,
        seconds(stats.average_trial_time),
        seconds(stats.total_trial_time)
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Trials run:       {}", stats.total_trials);
    println!(
        "   Solved:           {}",
        stats.solved.to_string().green()
    );
    if stats.failed() > 0 {
        println!(
            "   Failed:           {}",
            stats.failed().to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        stats.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        stats.max_guesses.to_string().yellow()
    );
    println!("   Wall time:        {:.2}s", stats.wall_time.as_secs_f64());
    println!("   Trials/second:    {:.1}", stats.trials_per_second);

    if stats.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let max_count = stats.distribution.values().copied().max().unwrap_or(0);
        for (&guesses, &count) in &stats.distribution {
            let pct = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {guesses:>2}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failed trials:".red().bold());
        for failure in stats.failures.iter().take(10) {
            println!(
                "   #{} secret {}: {}",
                failure.index, failure.secret, failure.error
            );
        }
        if stats.failures.len() > 10 {
            println!("   ...and {} more", stats.failures.len() - 10);
        }
    }
}
