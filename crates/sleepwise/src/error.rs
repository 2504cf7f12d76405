//! Error types for the sleepwise library.
//!
//! Only caller-contract violations live here. A rule that cannot read its
//! field is skipped by the evaluator and never becomes an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sleepwise operations.
#[derive(Debug, Error)]
pub enum SleepwiseError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no rows to read records from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Requested a row the table does not have.
    #[error("Row {row} out of range (table has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// A configuration value failed validation.
    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    /// A configuration file could not be parsed.
    #[error("Failed to parse config '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An external predictor failed.
    #[error("Predictor '{predictor}' failed: {message}")]
    Prediction { predictor: String, message: String },
}

/// Result type alias for sleepwise operations.
pub type Result<T> = std::result::Result<T, SleepwiseError>;
