//! Error types for the nursery core.
//!
//! This module defines the centralized error type [`NurseryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for nursery operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from form validation to directory fetch failures and configuration issues.
/// Every error is surfaced to the user as a single human-readable message;
/// none are fatal to the host process.
#[derive(Debug, Error)]
pub enum NurseryError {
    /// Form validation failed because the plant name was empty after trimming.
    ///
    /// Recoverable: the user corrects the name and resubmits. The form state
    /// is left untouched so nothing the user typed is lost.
    #[error("Plant name is required")]
    MissingName,

    /// The user directory fetch failed.
    ///
    /// Covers both transport failures (connection, HTTP status) and payload
    /// parse failures. The message is surfaced verbatim in the directory view;
    /// recovery happens only when the consumer re-activates that view.
    #[error("Directory fetch failed: {0}")]
    DirectoryFetch(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the worker thread cannot be spawned or has shut down while
    /// the host still holds its handle. The string contains details about the
    /// communication failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed. The string describes
    /// the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (configuration file
    /// reads). Automatically converts from `std::io::Error` using the `#[from]`
    /// attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for nursery operations.
///
/// This is a type alias for `std::result::Result<T, NurseryError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, NurseryError>;
