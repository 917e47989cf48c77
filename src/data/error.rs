//! Error types for data operations
//!
//! Provides unified error handling for file decoding. Only malformed *files*
//! surface here; malformed *cells* are expected in user-supplied data and
//! degrade to NaN or empty values inside the classifier and transformer.

use thiserror::Error;

// Re-export ingest limits from constants module for consistency
pub use crate::constants::{MAX_INPUT_SIZE_MB, MAX_ROWS};

/// Errors that can occur while decoding an uploaded file
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension not recognized as delimited text or spreadsheet
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Delimited-text parsing error
    #[error("Delimited parse error: {0}")]
    Delimited(String),

    /// Spreadsheet workbook error from calamine
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// File is too large for loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows for loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// No columns found in data
    #[error("No columns found")]
    NoColumns,
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
