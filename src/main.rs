//! Bulls and Cows simulator - CLI
//!
//! Simulates many rounds of Bulls and Cows with a naive guesser and reports
//! guess-count and timing statistics.

use anyhow::{Context, Result};
use bulls_and_cows::{
    commands::{SimulationConfig, export_pool, run_simulation, solve_secret},
    config::Config,
    core::{SecretGenerator, Sequence},
    output::{print_simulation_result, print_solve_result},
    pools::{enumerate, loader::load_from_file},
    solver::{CandidatePool, Guesser, PolicyType},
};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows simulator for a naive consistency-filtering guesser",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: bulls_and_cows.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of digits in the secret
    #[arg(short, long, global = true)]
    digits: Option<usize>,

    /// Pool file with one sequence per line (default: enumerate all)
    #[arg(short, long, global = true)]
    pool: Option<PathBuf>,

    /// Strategy: random (default), first
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Base seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run many trials and report statistics (default)
    Simulate {
        /// Number of trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Worker threads (default: one per core)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Force the opening guess of every trial
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve a single secret and show every guess
    Solve {
        /// The secret to break (random if omitted)
        secret: Option<String>,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the full candidate pool to a file
    Enumerate {
        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(digits) = cli.digits {
        config.num_of_digits = digits;
    }
    if let Some(pool) = cli.pool {
        config.digits_filepath = Some(pool);
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // Default to Simulate mode if no command given
    let command = cli.command.unwrap_or(Commands::Simulate {
        trials: None,
        threads: None,
        first_guess: None,
        quiet: false,
    });

    match command {
        Commands::Simulate {
            trials,
            threads,
            first_guess,
            quiet,
        } => {
            if let Some(trials) = trials {
                config.num_of_trials = trials;
            }
            if threads.is_some() {
                config.threads = threads;
            }
            if first_guess.is_some() {
                config.first_guess = first_guess;
            }
            config.validate()?;
            run_simulate_command(&config, !quiet)
        }
        Commands::Solve { secret, verbose } => {
            config.validate()?;
            run_solve_command(&config, secret.as_deref(), verbose)
        }
        Commands::Enumerate { output } => {
            config.validate()?;
            let count = export_pool(config.num_of_digits, &output)
                .with_context(|| format!("failed to write pool to {}", output.display()))?;
            println!("Wrote {count} sequences to {}", output.display());
            Ok(())
        }
    }
}

/// Load the pool named in the config, or enumerate the full one
fn load_master_pool(config: &Config) -> Result<CandidatePool> {
    let pool = match &config.digits_filepath {
        Some(path) => load_from_file(path, config.num_of_digits)
            .with_context(|| format!("failed to load candidate pool from {}", path.display()))?,
        None => enumerate(config.num_of_digits)?,
    };
    info!(
        "candidate pool ready: {} sequences of {} digits",
        pool.len(),
        pool.num_of_digits()
    );
    Ok(pool)
}

fn build_guesser(config: &Config) -> Result<Guesser<PolicyType>> {
    let guesser = Guesser::new(config.policy()?);
    Ok(match config.parsed_first_guess()? {
        Some(first) => guesser.with_first_guess(first),
        None => guesser,
    })
}

fn run_simulate_command(config: &Config, show_progress: bool) -> Result<()> {
    info!("configuration: {config:?}");

    let generator = SecretGenerator::new(config.num_of_digits)?;
    let master_pool = load_master_pool(config)?;
    let guesser = build_guesser(config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("base seed {seed}");

    println!(
        "Running {} trials with {}-digit secrets (strategy: {}, seed: {seed})...",
        config.num_of_trials,
        config.num_of_digits,
        guesser.policy().name()
    );

    let sim_config = SimulationConfig {
        num_of_trials: config.num_of_trials,
        seed,
        show_progress,
    };

    let stats = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to build worker thread pool")?
            .install(|| run_simulation(&guesser, &generator, &master_pool, &sim_config)),
        None => run_simulation(&guesser, &generator, &master_pool, &sim_config),
    };

    print_simulation_result(&stats);
    Ok(())
}

fn run_solve_command(config: &Config, secret: Option<&str>, verbose: bool) -> Result<()> {
    let secret = secret
        .map(str::parse::<Sequence>)
        .transpose()
        .context("invalid secret")?;

    let generator = SecretGenerator::new(config.num_of_digits)?;
    let master_pool = load_master_pool(config)?;
    let guesser = build_guesser(config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = solve_secret(&guesser, &generator, &master_pool, secret, &mut rng)?;
    print_solve_result(&result, verbose);
    Ok(())
}
