//! Configuration management for the curate application.
//!
//! This module resolves the root directory that holds all curate state and
//! derives every other path from it.
//!
//! # Environment Variables
//!
//! - `CURATE_HOME`: Root folder for `inbox.tsv`, `rules.tsv`, `templates/` and
//!   `digests/` (defaults to the current working directory)

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for the curate application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use curate::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     home_dir: PathBuf::from("/path/to/curate"),
/// };
/// assert_eq!(config.inbox_path(), PathBuf::from("/path/to/curate/inbox.tsv"));
/// ```
///
/// Loading configuration from the environment:
/// ```no_run
/// use curate::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
/// println!("{}", config.rules_path().display());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Root directory for all state.
    ///
    /// Loaded from `CURATE_HOME`, with a fallback to the current directory.
    pub home_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("home_dir", &constants::REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            home_dir: PathBuf::from(constants::DEFAULT_HOME_DIR),
        }
    }
}

impl Config {
    /// Creates a configuration rooted at `home_dir`.
    pub fn with_home(home_dir: impl Into<PathBuf>) -> Self {
        Config {
            home_dir: home_dir.into(),
        }
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The `CURATE_HOME` value is expanded with `shellexpand`, so `~` and
    /// `$VAR` references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let home_raw = env::var(constants::ENV_VAR_CURATE_HOME)
            .unwrap_or_else(|_| constants::DEFAULT_HOME_DIR.to_string());

        let expanded = shellexpand::full(&home_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let config = Config {
            home_dir: PathBuf::from(expanded.into_owned()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the home directory path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.home_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Home directory path is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The root directory.
    pub fn home(&self) -> &Path {
        &self.home_dir
    }

    /// Path of the record log.
    pub fn inbox_path(&self) -> PathBuf {
        self.home_dir.join(constants::INBOX_FILE_NAME)
    }

    /// Path of the classification rules file.
    pub fn rules_path(&self) -> PathBuf {
        self.home_dir.join(constants::RULES_FILE_NAME)
    }

    /// Directory holding digest templates.
    pub fn templates_dir(&self) -> PathBuf {
        self.home_dir.join(constants::TEMPLATES_DIR_NAME)
    }

    /// Path of the optional digest header template.
    pub fn header_path(&self) -> PathBuf {
        self.templates_dir().join(constants::HEADER_FILE_NAME)
    }

    /// Default output directory for digests.
    pub fn digests_dir(&self) -> PathBuf {
        self.home_dir.join(constants::DIGESTS_DIR_NAME)
    }

    /// Default destination for archived logs.
    pub fn archive_dir(&self) -> PathBuf {
        self.home_dir.join(constants::ARCHIVE_DIR_NAME)
    }
}
