//! Dataset access facade shared by the presentation adapters.

use std::sync::Arc;

use crate::dataset::DatasetHandle;
use crate::error::{DatalensError, Result};
use crate::record::{NormalizedRecord, normalize};
use crate::store::{DatasetStore, TRAIN_SPLIT};

/// Result of a load request: a usable handle, or the configurations the
/// caller must choose from before retrying.
pub enum LoadOutcome {
    /// The split is loaded and ready to browse.
    Loaded(Box<dyn DatasetHandle>),
    /// The dataset requires a configuration; these are the choices.
    ConfigRequired { configs: Vec<String> },
}

/// Front door to dataset access for both adapters.
///
/// Owns the config-required recovery and the single bounds-checked record
/// path, so the web and terminal front ends cannot drift apart on either.
#[derive(Clone)]
pub struct DatasetFacade {
    store: Arc<dyn DatasetStore>,
}

impl DatasetFacade {
    /// Create a facade over a store.
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self { store }
    }

    /// Enumerate configuration names for a dataset.
    ///
    /// # Errors
    ///
    /// Any store failure surfaces as
    /// [`DatalensError::ConfigLookup`] carrying the underlying message.
    pub fn list_configs(&self, dataset: &str) -> Result<Vec<String>> {
        self.store
            .config_names(dataset)
            .map_err(|e| DatalensError::ConfigLookup {
                dataset: dataset.to_string(),
                message: e.to_string(),
            })
    }

    /// Load the train split of a dataset.
    ///
    /// When the store signals that a configuration is required and none was
    /// supplied, this fetches the available configurations and returns the
    /// non-terminal [`LoadOutcome::ConfigRequired`] instead of failing.
    ///
    /// # Errors
    ///
    /// Every other store failure propagates unchanged.
    pub fn load_split(&self, dataset: &str, config: Option<&str>) -> Result<LoadOutcome> {
        match self.store.load_split(dataset, config, TRAIN_SPLIT) {
            Ok(handle) => Ok(LoadOutcome::Loaded(handle)),
            Err(DatalensError::ConfigRequired { .. }) if config.is_none() => {
                let configs = self.list_configs(dataset)?;
                Ok(LoadOutcome::ConfigRequired { configs })
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch one record, bounds-checked and normalized.
    ///
    /// The index is signed so callers can pass user-supplied values straight
    /// through; anything outside `[0, len)` reports the range.
    ///
    /// # Errors
    ///
    /// [`DatalensError::IndexOutOfRange`] outside the bounds.
    pub fn record_at(&self, handle: &dyn DatasetHandle, index: i64) -> Result<NormalizedRecord> {
        let total = handle.len();
        let raw = usize::try_from(index)
            .ok()
            .and_then(|i| handle.record(i));

        match raw {
            Some(record) => Ok(normalize(record)),
            None => Err(DatalensError::IndexOutOfRange { index, total }),
        }
    }

    /// The first `min(limit, len)` records, normalized.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::record_at`] failures, which cannot occur for the
    /// clamped range.
    pub fn preview(&self, handle: &dyn DatasetHandle, limit: usize) -> Result<Vec<NormalizedRecord>> {
        let count = limit.min(handle.len());
        (0..count)
            .map(|i| self.record_at(handle, i as i64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use crate::record::RawRecord;
    use crate::store::MockStore;
    use crate::value::Value;
    use serde_json::json;

    fn dataset_of(n: usize) -> InMemoryDataset {
        let records = (0..n)
            .map(|i| {
                let mut record = RawRecord::new();
                record.insert("text".to_string(), Value::String(format!("example {i}")));
                record.insert("label".to_string(), Value::Number(i.into()));
                record
            })
            .collect();
        InMemoryDataset::new(vec!["text".to_string(), "label".to_string()], records)
    }

    fn facade() -> DatasetFacade {
        let store = MockStore::new()
            .with_dataset("demo", dataset_of(10))
            .with_config("some/dataset", "all", dataset_of(3))
            .with_config("some/dataset", "filtered", dataset_of(2));
        DatasetFacade::new(Arc::new(store))
    }

    #[test]
    fn test_config_required_outcome_carries_configs() {
        let outcome = facade().load_split("some/dataset", None).unwrap();

        match outcome {
            LoadOutcome::ConfigRequired { configs } => {
                assert_eq!(configs, ["all", "filtered"]);
            }
            LoadOutcome::Loaded(_) => panic!("expected ConfigRequired"),
        }
    }

    #[test]
    fn test_load_with_config_succeeds() {
        let outcome = facade().load_split("some/dataset", Some("all")).unwrap();

        match outcome {
            LoadOutcome::Loaded(handle) => assert_eq!(handle.len(), 3),
            LoadOutcome::ConfigRequired { .. } => panic!("expected Loaded"),
        }
    }

    #[test]
    fn test_unknown_config_propagates() {
        let Err(err) = facade().load_split("some/dataset", Some("nope")) else {
            panic!("expected error");
        };
        assert!(matches!(err, DatalensError::UnknownConfig { .. }));
    }

    #[test]
    fn test_record_at_out_of_range_message() {
        let facade = facade();
        let LoadOutcome::Loaded(handle) = facade.load_split("demo", None).unwrap() else {
            panic!("expected Loaded");
        };

        let err = facade.record_at(handle.as_ref(), 15).unwrap_err();
        assert_eq!(err.to_string(), "Index 15 out of range (0-9)");
    }

    #[test]
    fn test_record_at_rejects_negative_index() {
        let facade = facade();
        let LoadOutcome::Loaded(handle) = facade.load_split("demo", None).unwrap() else {
            panic!("expected Loaded");
        };

        let err = facade.record_at(handle.as_ref(), -2).unwrap_err();
        assert!(matches!(
            err,
            DatalensError::IndexOutOfRange { index: -2, total: 10 }
        ));
    }

    #[test]
    fn test_record_at_normalizes() {
        let facade = facade();
        let LoadOutcome::Loaded(handle) = facade.load_split("demo", None).unwrap() else {
            panic!("expected Loaded");
        };

        let record = facade.record_at(handle.as_ref(), 4).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"text": "example 4", "label": 4})
        );
    }

    #[test]
    fn test_preview_caps_at_dataset_length() {
        let facade = facade();
        let LoadOutcome::Loaded(handle) = facade.load_split("some/dataset", Some("all")).unwrap()
        else {
            panic!("expected Loaded");
        };

        assert_eq!(facade.preview(handle.as_ref(), 10).unwrap().len(), 3);
    }

    #[test]
    fn test_preview_caps_at_limit() {
        let facade = facade();
        let LoadOutcome::Loaded(handle) = facade.load_split("demo", None).unwrap() else {
            panic!("expected Loaded");
        };

        let examples = facade.preview(handle.as_ref(), 4).unwrap();
        assert_eq!(examples.len(), 4);
        assert_eq!(examples[0]["text"], json!("example 0"));
    }

    #[test]
    fn test_list_configs_wraps_store_failures() {
        let err = facade().list_configs("missing").unwrap_err();

        match err {
            DatalensError::ConfigLookup { dataset, message } => {
                assert_eq!(dataset, "missing");
                assert!(message.contains("Unknown dataset"));
            }
            other => panic!("expected ConfigLookup, got {other:?}"),
        }
    }
}
