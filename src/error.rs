//! ktmine error types.
//!
//! All errors are typed and provide root cause information. Per-file
//! failures (read, parse, deadline) are recoverable: the batch catches
//! them at the pipeline boundary and moves on to the next file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ktmine operations.
#[derive(Error, Debug)]
pub enum MineError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is unreadable or invalid.
    #[error("Invalid config {path}: {message}")]
    Config {
        /// The config file path.
        path: PathBuf,
        /// The validation or parse error message.
        message: String,
    },

    /// Repository clone failed. Fatal: no extraction runs without a checkout.
    #[error("Failed to clone {url}: {message}")]
    CloneFailed {
        /// The repository URL.
        url: String,
        /// Output of the failed clone.
        message: String,
    },

    /// Tree-sitter parsing error.
    #[error("Parse error in {file}: {message}")]
    Parse {
        /// The file that failed to parse.
        file: PathBuf,
        /// The parse error message.
        message: String,
    },

    /// Per-file processing ran past its deadline.
    #[error("Deadline exceeded while processing {file}")]
    DeadlineExceeded {
        /// The file whose processing was cancelled.
        file: PathBuf,
    },

    /// Answer and prediction files have different sample counts.
    #[error(
        "Samples of predictions and answers are not equal: {answers} answers, {predictions} predictions"
    )]
    SampleCountMismatch {
        /// Number of answer samples.
        answers: usize,
        /// Number of prediction samples.
        predictions: usize,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 validation error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for MineError {
    fn from(err: std::io::Error) -> Self {
        MineError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for ktmine operations.
pub type Result<T> = std::result::Result<T, MineError>;
