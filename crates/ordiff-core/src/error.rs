//! Error types for the ordiff-core library.

use thiserror::Error;

/// Main error type for the ordiff library.
///
/// Extraction and comparison are total over their inputs and never fail;
/// errors only originate at the boundary with the filesystem and the
/// external conversion tool.
#[derive(Error, Debug)]
pub enum OrdiffError {
    /// Document-to-text conversion error.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the external `pdftotext` conversion step.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The conversion binary is not installed or not on PATH.
    #[error("`pdftotext` not found on PATH; install Poppler")]
    MissingBinary,

    /// The conversion process could not be started.
    #[error("failed to run pdftotext: {0}")]
    Spawn(String),

    /// The conversion process ran but reported failure.
    #[error("pdftotext exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    /// The conversion process produced output that is not valid UTF-8.
    #[error("pdftotext produced non-UTF-8 output")]
    InvalidUtf8,
}

/// Result type for the ordiff library.
pub type Result<T> = std::result::Result<T, OrdiffError>;
