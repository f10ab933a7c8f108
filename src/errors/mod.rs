//! Error handling utilities for the wayfarer application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur when reading or decoding a
/// backup archive.
///
/// This enum provides detailed, contextual error information for the two
/// failure modes of the archive import path: a container that cannot be walked
/// at all, and a metadata record that cannot be decoded.
///
/// # Examples
///
/// Creating a corrupt-archive error:
///
/// ```
/// use wayfarer::errors::ArchiveError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::UnexpectedEof, "unexpected EOF");
/// let error = ArchiveError::Corrupt(io_error);
///
/// assert!(format!("{}", error).contains("corrupt"));
/// ```
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Error when the archive container is structurally invalid or truncated.
    #[error("Backup archive is corrupt or truncated: {0}. The archive cannot be read; restore from a different backup if one exists.")]
    Corrupt(#[source] io::Error),

    /// Error when a metadata record is present but cannot be decoded as JSON.
    #[error("Metadata record '{name}' could not be decoded: {source}")]
    Metadata {
        /// The name of the record that failed to decode
        name: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents directive-level failures in the text import grammar.
///
/// The text import parser is whole-or-nothing: the first directive that fails
/// to decode aborts the entire document parse. Each variant records the line
/// number and the offending value so the user can find and fix the directive.
///
/// # Examples
///
/// ```
/// use wayfarer::errors::ParseError;
///
/// let error = ParseError::InvalidTimestamp {
///     line: 12,
///     value: "not-a-date".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("line 12"));
/// assert!(format!("{}", error).contains("not-a-date"));
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error when a `Type:` directive names an entry type that does not exist.
    #[error("line {line}: unknown entry type '{value}'. Expected one of NOTE, PHOTO, PLACE, ROUTE_POINT, TRIP.")]
    UnknownEntryType {
        /// One-based line number of the failing directive
        line: usize,
        /// The unrecognized type name
        value: String,
    },

    /// Error when a `Timestamp:` directive value cannot be parsed as a timestamp.
    #[error("line {line}: invalid timestamp '{value}'. Expected an RFC 3339 timestamp or a YYYY-MM-DD date.")]
    InvalidTimestamp {
        /// One-based line number of the failing directive
        line: usize,
        /// The unparseable timestamp text
        value: String,
    },
}

/// Represents all possible errors that can occur in the wayfarer application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use wayfarer::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use wayfarer::errors::AppError;
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
    Io(#[from] io::Error),

    /// Errors in journal data handling (e.g., an unreadable journal file).
    #[error("Journal error: {0}")]
    Journal(String),

    /// Errors when reading or decoding a backup archive.
    ///
    /// This variant uses a dedicated ArchiveError type to provide detailed
    /// information about what went wrong with the archive container or its
    /// metadata record.
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Errors from the text import grammar.
    ///
    /// This variant uses a dedicated ParseError type carrying the line number
    /// and offending value of the directive that failed.
    #[error("Text import error: {0}")]
    Parse(#[from] ParseError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use wayfarer::errors::{AppResult, AppError};
///
/// fn might_fail(succeed: bool) -> AppResult<()> {
///     if succeed {
///         Ok(())
///     } else {
///         Err(AppError::Journal("something went wrong".to_string()))
///     }
/// }
///
/// assert!(might_fail(true).is_ok());
/// assert!(might_fail(false).is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
