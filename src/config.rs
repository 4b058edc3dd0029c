//! Run configuration
//!
//! Settings come from an optional TOML file and are then overridden by CLI
//! flags. Validation happens once, before any trial runs.

use crate::core::{MAX_DIGITS, Sequence, SequenceError};
use crate::solver::PolicyType;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file picked up from the working directory when no path is given
pub const DEFAULT_PATH: &str = "bulls_and_cows.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Length of secrets and guesses
    pub num_of_digits: usize,
    /// How many trials the simulation runs
    pub num_of_trials: usize,
    /// Pool file to load; the full pool is enumerated when absent
    #[serde(alias = "pool_path")]
    pub digits_filepath: Option<PathBuf>,
    /// Base seed for reproducible runs
    pub seed: Option<u64>,
    /// Worker threads; rayon's default when absent
    pub threads: Option<usize>,
    /// Selection policy name
    pub strategy: String,
    /// Opening guess used for every trial
    pub first_guess: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_of_digits: 4,
            num_of_trials: 1000,
            digits_filepath: None,
            seed: None,
            threads: None,
            strategy: PolicyType::default().name().to_string(),
            first_guess: None,
        }
    }
}

impl Config {
    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read settings from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Parse` if it is not valid settings TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load settings from `path`, or from [`DEFAULT_PATH`] if it exists, or defaults
    ///
    /// An explicit path must exist; the default path is optional.
    ///
    /// # Errors
    /// Propagates errors from [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_PATH).is_file() => Self::from_file(DEFAULT_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Check every setting before the run starts
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfiguration` describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_of_digits == 0 || self.num_of_digits > MAX_DIGITS {
            return Err(invalid(format!(
                "num_of_digits must be between 1 and {MAX_DIGITS}, got {}",
                self.num_of_digits
            )));
        }
        if self.num_of_trials == 0 {
            return Err(invalid("num_of_trials must be positive".to_string()));
        }
        if self.threads == Some(0) {
            return Err(invalid("threads must be positive".to_string()));
        }
        self.policy()?;
        self.parsed_first_guess()?;
        Ok(())
    }

    /// Selection policy named by `strategy`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfiguration` for an unknown name.
    pub fn policy(&self) -> Result<PolicyType, ConfigError> {
        PolicyType::from_name(&self.strategy).ok_or_else(|| {
            invalid(format!(
                "unknown strategy '{}', expected one of: {}",
                self.strategy,
                PolicyType::NAMES.join(", ")
            ))
        })
    }

    /// Opening guess, parsed and checked against `num_of_digits`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfiguration` if the guess is malformed or
    /// has the wrong length.
    pub fn parsed_first_guess(&self) -> Result<Option<Sequence>, ConfigError> {
        let Some(text) = &self.first_guess else {
            return Ok(None);
        };

        let guess: Sequence = text
            .parse()
            .map_err(|e: SequenceError| invalid(format!("first_guess '{text}': {e}")))?;
        if guess.len() != self.num_of_digits {
            return Err(invalid(format!(
                "first_guess '{text}' has {} digits, expected {}",
                guess.len(),
                self.num_of_digits
            )));
        }
        Ok(Some(guess))
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(content, Path::new("test.toml"))
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.num_of_digits, 4);
        assert_eq!(config.num_of_trials, 1000);
        assert_eq!(config.strategy, "random");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_file() {
        let config = parse(
            r#"
            num_of_digits = 5
            num_of_trials = 250
            digits_filepath = "digits.txt"
            seed = 99
            threads = 2
            strategy = "first"
            first_guess = "01234"
            "#,
        )
        .unwrap();

        assert_eq!(config.num_of_digits, 5);
        assert_eq!(config.num_of_trials, 250);
        assert_eq!(config.digits_filepath, Some(PathBuf::from("digits.txt")));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.policy().unwrap(), PolicyType::First);
        assert_eq!(
            config.parsed_first_guess().unwrap(),
            Some("01234".parse().unwrap())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_file_fills_defaults() {
        let config = parse("num_of_trials = 10\npool_path = \"pool.txt\"\n").unwrap();
        assert_eq!(config.num_of_digits, 4);
        assert_eq!(config.num_of_trials, 10);
        assert_eq!(config.digits_filepath, Some(PathBuf::from("pool.txt")));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(matches!(
            parse("num_of_digitz = 4\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn validate_rejects_digit_counts_outside_alphabet() {
        for n in [0, 11, 42] {
            let config = Config {
                num_of_digits: n,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn validate_rejects_zero_trials_and_threads() {
        let no_trials = Config {
            num_of_trials: 0,
            ..Config::default()
        };
        assert!(no_trials.validate().is_err());

        let no_threads = Config {
            threads: Some(0),
            ..Config::default()
        };
        assert!(no_threads.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_strategy() {
        let config = Config {
            strategy: "minimax".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("minimax"));
    }

    #[test]
    fn validate_checks_first_guess() {
        let bad_digits = Config {
            first_guess: Some("1123".to_string()),
            ..Config::default()
        };
        assert!(bad_digits.validate().is_err());

        let bad_length = Config {
            first_guess: Some("123".to_string()),
            ..Config::default()
        };
        assert!(bad_length.validate().is_err());
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let path = std::env::temp_dir().join("bulls_and_cows_no_such_settings.toml");
        let _ = fs::remove_file(&path);
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "bulls_and_cows_settings_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "num_of_digits = 3\nnum_of_trials = 7\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.num_of_digits, 3);
        assert_eq!(config.num_of_trials, 7);
    }
}
