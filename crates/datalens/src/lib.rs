//! datalens: browse datasets from a web API or the terminal.
//!
//! The library is a thin presentation core over a dataset store: resolve a
//! dataset identifier, discover its configuration variants, load the train
//! split, and reshape each record into JSON-safe values for whichever front
//! end asked.
//!
//! # Core Principles
//!
//! - **One fetch path**: every record the adapters show passes through the
//!   facade's bounds-checked, normalizing accessor
//! - **Structured failures**: configuration-required is a variant the caller
//!   recovers from, never a message to parse
//! - **Order preserved**: records keep their field order end to end
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use datalens::value::Value;
//! use datalens::{DatasetFacade, InMemoryDataset, LoadOutcome, MockStore, RawRecord};
//!
//! let mut record = RawRecord::new();
//! record.insert("text".to_string(), Value::String("hello".to_string()));
//! let data = InMemoryDataset::new(vec!["text".to_string()], vec![record]);
//!
//! let store = MockStore::new().with_dataset("demo", data);
//! let facade = DatasetFacade::new(Arc::new(store));
//!
//! match facade.load_split("demo", None).unwrap() {
//!     LoadOutcome::Loaded(handle) => {
//!         let example = facade.record_at(handle.as_ref(), 0).unwrap();
//!         assert_eq!(example["text"], serde_json::json!("hello"));
//!     }
//!     LoadOutcome::ConfigRequired { .. } => unreachable!(),
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod facade;
pub mod record;
pub mod store;
pub mod value;

pub use dataset::{DatasetHandle, DatasetReference, DatasetSummary, InMemoryDataset};
pub use error::{DatalensError, Result};
pub use facade::{DatasetFacade, LoadOutcome};
pub use record::{NormalizedRecord, PRESERVED_TEXT_FIELDS, RawRecord, normalize};
pub use store::{DatasetStore, LocalStore, MockStore, TRAIN_SPLIT};
