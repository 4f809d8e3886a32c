//! Error types for the filing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while composing, validating,
//! and transitioning filings.

use thiserror::Error;

use crate::models::FilingStatus;

/// The main error type for the filing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// is recoverable at the calling layer; the engine never aborts the process.
///
/// # Example
///
/// ```
/// use filing_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     message: "reiwa 6-02-30 does not denote a real calendar date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date: reiwa 6-02-30 does not denote a real calendar date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An era-tagged date tuple does not denote a real calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// A description of why the date is invalid.
        message: String,
    },

    /// A schema-required field was missing or malformed at submit time.
    #[error("Validation failed: missing or malformed required fields [{}]", missing.join(", "))]
    ValidationFailed {
        /// The field paths that are required but absent, or populated with a
        /// malformed value.
        missing: Vec<String>,
    },

    /// A lifecycle transition guard was violated.
    #[error("Illegal transition from '{from}' to '{to}': {reason}")]
    IllegalTransition {
        /// The status the filing was in.
        from: FilingStatus,
        /// The status that was requested.
        to: FilingStatus,
        /// Why the transition was refused.
        reason: String,
    },

    /// A referenced filing or person was absent.
    #[error("Not found: {entity} '{id}'")]
    NotFound {
        /// The kind of entity that was looked up (e.g., "filing", "employee").
        entity: String,
        /// The identifier that was not found.
        id: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
