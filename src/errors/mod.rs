//! Error handling utilities for the curate application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Recoverable problems in stored data (a log line with a bad date, a rule with
//! an invalid pattern) never surface here: they are skipped where they are read.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the date and ISO week engine.
///
/// # Examples
///
/// ```
/// use curate::errors::DateError;
///
/// let error = DateError::InvalidDate("2023-02-30".to_string());
/// assert!(format!("{}", error).contains("2023-02-30"));
/// assert!(format!("{}", error).contains("YYYY-MM-DD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not a real calendar date in `YYYY-MM-DD` form.
    #[error("Invalid date '{0}': expected a calendar date in YYYY-MM-DD format")]
    InvalidDate(String),

    /// The input is not an ISO week in `YYYY-Www` form with a week in 1..=53.
    #[error("Invalid ISO week '{0}': expected YYYY-Www with a week between 01 and 53")]
    InvalidWeek(String),

    /// An explicit range whose start falls after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    EmptyRange {
        /// First day of the requested range
        start: NaiveDate,
        /// Last day of the requested range
        end: NaiveDate,
    },
}

/// Errors that can occur while archiving the record log.
///
/// Every variant is raised before the live log is touched, so a failed archive
/// always leaves the original records in place.
///
/// # Examples
///
/// ```
/// use curate::errors::ArchiveError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = ArchiveError::Copy {
///     destination: PathBuf::from("/archive/inbox-20240101-120000.tsv"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
/// assert!(format!("{}", error).contains("left untouched"));
/// ```
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive directory could not be created.
    #[error("Failed to create archive directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The log could be neither moved nor copied to its destination.
    #[error("Failed to archive inbox to {}: {source}. The inbox was left untouched.", destination.display())]
    Copy {
        /// The intended archive file
        destination: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the curate application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use curate::errors::AppError;
///
/// let error = AppError::Config("Home directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Home directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use curate::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed user input other than dates (e.g. an empty URL).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed dates, ISO weeks or ranges supplied by the user.
    #[error("{0}")]
    Date(#[from] DateError),

    /// Failures while archiving the record log.
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// A rendered digest could not be written to its destination.
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        /// The output path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Process exit status reported for this error.
    ///
    /// Bad user input, archive failures and digest output failures exit with
    /// `2`; everything else exits with `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidInput(_)
            | AppError::Date(_)
            | AppError::Archive(_)
            | AppError::Output { .. } => 2,
            AppError::Config(_) | AppError::Io(_) => 1,
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use curate::errors::{AppResult, AppError};
///
/// fn might_fail(url: &str) -> AppResult<&str> {
///     if url.is_empty() {
///         return Err(AppError::InvalidInput("URL must not be empty".to_string()));
///     }
///     Ok(url)
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let input_error = AppError::InvalidInput("URL must not be empty".to_string());
        assert_eq!(
            format!("{}", input_error),
            "Invalid input: URL must not be empty"
        );

        // Date errors are shown as-is, without a wrapper prefix
        let date_error = AppError::Date(DateError::InvalidWeek("2024-W60".to_string()));
        assert!(format!("{}", date_error).starts_with("Invalid ISO week '2024-W60'"));
    }

    #[test]
    fn test_date_error_from_conversion() {
        let app_error: AppError = DateError::InvalidDate("2023-13-01".to_string()).into();
        match app_error {
            AppError::Date(DateError::InvalidDate(input)) => assert_eq!(input, "2023-13-01"),
            _ => panic!("Expected AppError::Date variant"),
        }
    }

    #[test]
    fn test_empty_range_display() {
        let error = DateError::EmptyRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid range: start 2024-03-10 is after end 2024-03-01"
        );
    }

    #[test]
    fn test_archive_error_source_chaining() {
        let error = ArchiveError::Copy {
            destination: PathBuf::from("/tmp/archive/inbox.tsv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        let source = error
            .source()
            .expect("ArchiveError::Copy should have a source");
        let source_io_error = source
            .downcast_ref::<io::Error>()
            .expect("Source should be an io::Error");
        assert_eq!(source_io_error.kind(), io::ErrorKind::PermissionDenied);

        let app_error: AppError = error.into();
        assert!(format!("{}", app_error).starts_with("Archive error:"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Config("x".to_string()).exit_code(), 1);
        assert_eq!(AppError::Io(io::Error::other("disk full")).exit_code(), 1);
        assert_eq!(AppError::InvalidInput("x".to_string()).exit_code(), 2);
        assert_eq!(
            AppError::Date(DateError::InvalidDate("x".to_string())).exit_code(),
            2
        );
        assert_eq!(
            AppError::Archive(ArchiveError::CreateDir {
                path: PathBuf::from("/nope"),
                source: io::Error::other("denied"),
            })
            .exit_code(),
            2
        );
        assert_eq!(
            AppError::Output {
                path: PathBuf::from("/nope/digest.md"),
                source: io::Error::other("denied"),
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn test_result_combinators() {
        let io_result: Result<(), io::Error> = Err(io::Error::other("test error"));
        let app_result: AppResult<()> = io_result.map_err(AppError::Io);

        match app_result {
            Err(AppError::Io(inner)) => {
                assert_eq!(inner.kind(), io::ErrorKind::Other);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }
}
