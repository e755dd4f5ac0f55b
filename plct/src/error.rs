//! Error handling module for the plct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the plct CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of plct commands.
#[derive(Error, Debug)]
pub enum PlctError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadSource {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input contained a lexical error.
    ///
    /// `rendered` already carries the line, column and source excerpt.
    #[error("{rendered}")]
    Lex {
        /// Human-readable report of the error.
        rendered: String,
    },

    /// Error when the tracing subscriber cannot be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl PlctError {
    /// Process exit status for this error.
    ///
    /// Lexical errors exit with 1; configuration, IO and setup failures
    /// exit with 2, matching clap's status for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Lex { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias using PlctError.
pub type Result<T> = std::result::Result<T, PlctError>;
