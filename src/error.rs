//! Error types for the bonus allocation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The allocation core itself is total and never fails; errors only arise
//! at the boundaries (configuration loading, snapshot and CSV parsing,
//! snapshot storage).

use thiserror::Error;

/// The main error type for the bonus allocation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use bonus_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A JSON snapshot could not be parsed.
    ///
    /// A failed import must leave the caller's settings and employee list
    /// untouched; this error carries no partial data.
    #[error("Failed to parse snapshot: {message}")]
    SnapshotParse {
        /// A description of the parse error.
        message: String,
    },

    /// A snapshot could not be encoded to JSON.
    #[error("Failed to encode snapshot: {message}")]
    SnapshotEncode {
        /// A description of the encoding error.
        message: String,
    },

    /// A CSV employee record could not be parsed.
    #[error("Invalid CSV record on line {line}: {message}")]
    CsvParse {
        /// The 1-based line number of the invalid record.
        line: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A snapshot file could not be read or written.
    #[error("Snapshot storage error at '{path}': {message}")]
    Storage {
        /// The path of the snapshot file.
        path: String,
        /// A description of the I/O error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
