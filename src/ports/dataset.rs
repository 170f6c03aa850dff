//! Dataset port: Trait for loading the wellbeing survey dataset.

use polars::prelude::{DataFrame, PolarsError};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataframe error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Target column {0} is missing or not numeric")]
    MissingTarget(String),

    #[error("Dataset is empty after cleaning")]
    Empty,
}

/// Source of the raw, uncleaned dataset.
pub trait DatasetSource: Send + Sync {
    /// Human-readable origin, for messages.
    fn describe(&self) -> String;

    /// Load the whole dataset.
    ///
    /// # Errors
    /// Returns `DatasetError` if the source cannot be read or parsed.
    fn load(&self) -> Result<DataFrame, DatasetError>;
}
