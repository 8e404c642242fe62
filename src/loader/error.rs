use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to decompress '{0}'")]
    Decompress(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse CSV data")]
    Csv(#[source] PolarsError),

    #[error("Required column '{0}' not found in dataset")]
    MissingColumn(String, #[source] PolarsError),

    // Raised for blanks, non-integers and values that cannot be a year/month/day
    #[error("Data row {row}: '{column}' is missing or not a valid integer")]
    MissingDateField { row: usize, column: String },

    #[error("Invalid dataset configuration in '{0}'")]
    Config(PathBuf, #[source] serde_json::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
