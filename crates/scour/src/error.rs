//! Error types for the scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scour operations.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a cell into a numeric value.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Invalid corruption plan or pipeline configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured target column is absent from the loaded table.
    #[error("Target column '{column}' not found. Available columns: {available:?}")]
    MissingTarget {
        column: String,
        available: Vec<String>,
    },

    /// The regression model could not be fitted or scored.
    #[error("Model error: {0}")]
    Model(String),

    /// The evaluation service failed while scoring a cleaned table.
    #[error("Evaluation failed for strategy '{strategy}': {message}")]
    Evaluation { strategy: String, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
