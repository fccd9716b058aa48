//! Error types for the Plume library.
//!
//! The analysis operations themselves are total and never return errors.
//! [`PlumeError`] covers the fallible edges around them: compiling custom
//! token patterns, validating or loading an engine configuration, the
//! history file and CLI I/O.
//!
//! # Examples
//!
//! ```
//! use plume::error::{PlumeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PlumeError::invalid_config("hashtag count out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Plume operations.
#[derive(Error, Debug)]
pub enum PlumeError {
    /// I/O errors (reading input files, history file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis setup errors (invalid token patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// History store errors
    #[error("History error: {0}")]
    History(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PlumeError.
pub type Result<T> = std::result::Result<T, PlumeError>;

impl PlumeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PlumeError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PlumeError::Config(msg.into())
    }

    /// Create a new history error.
    pub fn history<S: Into<String>>(msg: S) -> Self {
        PlumeError::History(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PlumeError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PlumeError::Config(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PlumeError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PlumeError::Other(format!("Not found: {}", msg.into()))
    }
}
