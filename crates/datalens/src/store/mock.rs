//! Mock dataset store for tests and examples.

use std::collections::HashMap;

use crate::dataset::{DatasetHandle, InMemoryDataset};
use crate::error::{DatalensError, Result};

use super::DatasetStore;

/// In-memory store with canned datasets.
///
/// Serves the same records for every split name, which keeps fixtures small;
/// the config-required and unknown-dataset behavior matches [`super::LocalStore`].
#[derive(Default)]
pub struct MockStore {
    datasets: HashMap<String, MockDataset>,
}

#[derive(Default)]
struct MockDataset {
    /// Config name to split data; the empty key holds configless data.
    variants: HashMap<String, InMemoryDataset>,
}

impl MockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset with no configurations.
    pub fn with_dataset(mut self, name: &str, data: InMemoryDataset) -> Self {
        self.datasets
            .entry(name.to_string())
            .or_default()
            .variants
            .insert(String::new(), data);
        self
    }

    /// Register one configuration of a dataset.
    pub fn with_config(mut self, name: &str, config: &str, data: InMemoryDataset) -> Self {
        self.datasets
            .entry(name.to_string())
            .or_default()
            .variants
            .insert(config.to_string(), data);
        self
    }
}

impl DatasetStore for MockStore {
    fn config_names(&self, dataset: &str) -> Result<Vec<String>> {
        let entry = self
            .datasets
            .get(dataset)
            .ok_or_else(|| DatalensError::UnknownDataset(dataset.to_string()))?;

        let mut configs: Vec<String> = entry
            .variants
            .keys()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        configs.sort();
        Ok(configs)
    }

    fn load_split(
        &self,
        dataset: &str,
        config: Option<&str>,
        _split: &str,
    ) -> Result<Box<dyn DatasetHandle>> {
        let entry = self
            .datasets
            .get(dataset)
            .ok_or_else(|| DatalensError::UnknownDataset(dataset.to_string()))?;

        let key = config.unwrap_or("");
        match entry.variants.get(key) {
            Some(data) => Ok(Box::new(data.clone())),
            None if config.is_none() => Err(DatalensError::ConfigRequired {
                dataset: dataset.to_string(),
            }),
            None => Err(DatalensError::UnknownConfig {
                dataset: dataset.to_string(),
                config: key.to_string(),
            }),
        }
    }
}
