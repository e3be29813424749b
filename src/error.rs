//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report. Most of the pipeline degrades silently
//! (unmatched lines are dropped and counted, undetectable languages become
//! `"unknown"`), so the error surface is deliberately small:
//!
//! - **I/O and encoding** problems while loading an export
//! - **Unrecognized timestamps** when no date template fits the whole chat
//! - **Unknown participants** requested by name
//! - **Output** serialization failures (JSON, CSV)

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Lines matched the message pattern, but no date template could parse
    /// every extracted timestamp.
    ///
    /// Carries the first timestamp text that failed, to help identify the
    /// export's locale.
    #[error("Unrecognized timestamp format (first failing value: '{sample}')")]
    UnrecognizedDateFormat {
        /// Timestamp text that could not be parsed
        sample: String,
    },

    /// A participant name was requested that never sent a message.
    #[error("Unknown participant '{name}'")]
    UnknownParticipant {
        /// The requested sender name
        name: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unrecognized date format error.
    pub fn unrecognized_date(sample: impl Into<String>) -> Self {
        ChatlensError::UnrecognizedDateFormat {
            sample: sample.into(),
        }
    }

    /// Creates an unknown participant error.
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        ChatlensError::UnknownParticipant { name: name.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if no date template fit the export.
    pub fn is_unrecognized_date(&self) -> bool {
        matches!(self, ChatlensError::UnrecognizedDateFormat { .. })
    }

    /// Returns `true` if this is an unknown participant error.
    pub fn is_unknown_participant(&self) -> bool {
        matches!(self, ChatlensError::UnknownParticipant { .. })
    }
}
