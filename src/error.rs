//! Error types for propgen.
//!
//! Uses thiserror for derive macros. Every stage of the pipeline returns
//! [`PropgenError`]; nothing is retried and nothing is recovered from, so the
//! first error aborts the run and is mapped to an exit code in `main`.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for propgen operations.
#[derive(Error, Debug)]
pub enum PropgenError {
    /// A required field is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The weekday name is not in the weekday table.
    #[error(
        "configuration error: unrecognized weekday '{0}' (expected one of: {names})",
        names = crate::schedule::WEEKDAY_NAMES.join(", ")
    )]
    InvalidWeekday(String),

    /// A fragment failed to render.
    #[error("failed to render fragment '{fragment}': {message}")]
    Render { fragment: String, message: String },

    /// A file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PropgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PropgenError::Config(_) => exit_codes::CONFIG_ERROR,
            PropgenError::InvalidWeekday(_) => exit_codes::CONFIG_ERROR,
            PropgenError::Render { .. } => exit_codes::RENDER_FAILURE,
            PropgenError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropgenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for propgen operations.
pub type Result<T> = std::result::Result<T, PropgenError>;
