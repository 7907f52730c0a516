//! Dataset store backends.
//!
//! A store is the seam to whatever actually owns dataset bytes. Everything
//! above this trait treats loading as opaque: the facade and both adapters
//! only ever see handles and structured errors.

mod local;
mod mock;

pub use local::LocalStore;
pub use mock::MockStore;

use crate::dataset::DatasetHandle;
use crate::error::Result;

/// The split every adapter requests.
pub const TRAIN_SPLIT: &str = "train";

/// A source of datasets addressed by identifier.
pub trait DatasetStore: Send + Sync {
    /// Enumerate configuration names for a dataset, sorted.
    ///
    /// # Errors
    ///
    /// Fails when the identifier does not resolve or the store cannot be
    /// read.
    fn config_names(&self, dataset: &str) -> Result<Vec<String>>;

    /// Load one split of a dataset.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::DatalensError::ConfigRequired`] when the dataset
    /// has configurations and none was named; callers recover by choosing
    /// one. All other failures are terminal for the request.
    fn load_split(
        &self,
        dataset: &str,
        config: Option<&str>,
        split: &str,
    ) -> Result<Box<dyn DatasetHandle>>;
}
