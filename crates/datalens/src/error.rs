//! Error types for the datalens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datalens operations.
#[derive(Debug, Error)]
pub enum DatalensError {
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

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset identifier is not a valid store address.
    #[error("Invalid dataset identifier: '{0}'")]
    InvalidIdentifier(String),

    /// No dataset found under the identifier.
    #[error("Unknown dataset: '{0}'")]
    UnknownDataset(String),

    /// The named configuration does not exist for this dataset.
    #[error("Unknown config '{config}' for dataset '{dataset}'")]
    UnknownConfig { dataset: String, config: String },

    /// The dataset has configurations and none was named.
    ///
    /// Not a terminal failure: callers recover by picking one of the
    /// dataset's configurations and retrying.
    #[error("Config name is missing for dataset '{dataset}'; a configuration must be selected")]
    ConfigRequired { dataset: String },

    /// Configuration enumeration failed.
    #[error("Config lookup failed for '{dataset}': {message}")]
    ConfigLookup { dataset: String, message: String },

    /// The requested split does not exist in the dataset.
    #[error("Split '{split}' not found for dataset '{dataset}'")]
    MissingSplit { dataset: String, split: String },

    /// Split file format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty split file or no records to browse.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Requested record index outside the dataset bounds.
    #[error("Index {} out of range (0-{})", .index, .total.saturating_sub(1))]
    IndexOutOfRange { index: i64, total: usize },
}

/// Result type alias for datalens operations.
pub type Result<T> = std::result::Result<T, DatalensError>;
