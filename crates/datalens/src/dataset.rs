//! Dataset references, handles, and summaries.

use serde::{Deserialize, Serialize};

use crate::record::RawRecord;

/// Identifies which dataset (and optional configuration) to load.
///
/// Immutable once constructed; supplied by the caller on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReference {
    /// Dataset identifier in the store's namespace.
    pub dataset: String,
    /// Configuration name, for datasets that require one.
    pub config: Option<String>,
}

impl DatasetReference {
    /// Reference a dataset with no configuration.
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            config: None,
        }
    }

    /// Attach a configuration name.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }
}

/// Shape of a loaded split, derived from a handle at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of records in the split.
    pub num_examples: usize,
    /// Feature (field) names in schema order.
    pub features: Vec<String>,
}

/// A loaded dataset split.
///
/// Raw index access returns `None` past the end; the bounds policy (and the
/// error it produces) lives in the facade, which is the only fetch path the
/// adapters use.
pub trait DatasetHandle: Send + Sync {
    /// Number of records in the split.
    fn len(&self) -> usize;

    /// Whether the split holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feature names in schema order.
    fn feature_names(&self) -> &[String];

    /// The record at `index`, or `None` past the end.
    fn record(&self, index: usize) -> Option<&RawRecord>;

    /// Summarize the split.
    fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            num_examples: self.len(),
            features: self.feature_names().to_vec(),
        }
    }
}

/// A fully materialized split.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    features: Vec<String>,
    records: Vec<RawRecord>,
}

impl InMemoryDataset {
    /// Create a dataset from feature names and records.
    pub fn new(features: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self { features, records }
    }
}

impl DatasetHandle for InMemoryDataset {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn feature_names(&self) -> &[String] {
        &self.features
    }

    fn record(&self, index: usize) -> Option<&RawRecord> {
        self.records.get(index)
    }
}
