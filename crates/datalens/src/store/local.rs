//! Local filesystem dataset store.
//!
//! Datasets live as directories under a root, addressed by identifier
//! (`name` or `org/name`). Configurations are subdirectories holding their
//! own split files; splits are `<split>.jsonl` or `<split>.csv` files.
//!
//! ```text
//! root/
//!   smoltalk/              configless: root/smoltalk/train.jsonl
//!   acme/corpus/           with configs:
//!     all/train.jsonl
//!     filtered/train.jsonl
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dataset::{DatasetHandle, InMemoryDataset};
use crate::error::{DatalensError, Result};
use crate::record::RawRecord;
use crate::value::Value;

use super::DatasetStore;

/// Identifiers: a name, optionally namespaced one level. Rejecting anything
/// else also forecloses path traversal through the identifier.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*(/[A-Za-z0-9][A-Za-z0-9._-]*)?$").unwrap()
});

/// Split file extensions, tried in order.
const SPLIT_EXTENSIONS: &[&str] = &["jsonl", "csv"];

/// Store rooted at a directory on the local filesystem.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn dataset_dir(&self, dataset: &str) -> Result<PathBuf> {
        if !IDENTIFIER.is_match(dataset) {
            return Err(DatalensError::InvalidIdentifier(dataset.to_string()));
        }

        let dir = self.root.join(dataset);
        if !dir.is_dir() {
            return Err(DatalensError::UnknownDataset(dataset.to_string()));
        }
        Ok(dir)
    }
}

impl DatasetStore for LocalStore {
    fn config_names(&self, dataset: &str) -> Result<Vec<String>> {
        let dir = self.dataset_dir(dataset)?;

        let entries = std::fs::read_dir(&dir).map_err(|e| DatalensError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut configs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DatalensError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() && contains_split_files(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    configs.push(name.to_string());
                }
            }
        }

        configs.sort();
        Ok(configs)
    }

    fn load_split(
        &self,
        dataset: &str,
        config: Option<&str>,
        split: &str,
    ) -> Result<Box<dyn DatasetHandle>> {
        let dir = self.dataset_dir(dataset)?;
        let configs = self.config_names(dataset)?;

        let split_dir = match config {
            Some(name) => {
                if !configs.iter().any(|c| c == name) {
                    return Err(DatalensError::UnknownConfig {
                        dataset: dataset.to_string(),
                        config: name.to_string(),
                    });
                }
                dir.join(name)
            }
            None if !configs.is_empty() => {
                return Err(DatalensError::ConfigRequired {
                    dataset: dataset.to_string(),
                });
            }
            None => dir,
        };

        let path = split_file(&split_dir, split).ok_or_else(|| DatalensError::MissingSplit {
            dataset: dataset.to_string(),
            split: split.to_string(),
        })?;

        let handle = match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") => read_jsonl(&path)?,
            Some("csv") => read_csv(&path)?,
            other => {
                return Err(DatalensError::UnsupportedFormat(
                    other.unwrap_or("").to_string(),
                ));
            }
        };

        Ok(Box::new(handle))
    }
}

/// Locate the split file inside a dataset or config directory.
fn split_file(dir: &Path, split: &str) -> Option<PathBuf> {
    SPLIT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{split}.{ext}")))
        .find(|candidate| candidate.is_file())
}

/// Whether a directory holds at least one split file.
fn contains_split_files(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries.filter_map(|e| e.ok()).any(|entry| {
                let path = entry.path();
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| SPLIT_EXTENSIONS.contains(&e))
                        .unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

fn read_jsonl(path: &Path) -> Result<InMemoryDataset> {
    let file = File::open(path).map_err(|e| DatalensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut features: Vec<String> = Vec::new();
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| DatalensError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let json: serde_json::Value = serde_json::from_str(&line)?;
        let serde_json::Value::Object(map) = json else {
            return Err(DatalensError::UnsupportedFormat(format!(
                "non-object record in {}",
                path.display()
            )));
        };

        let mut record = RawRecord::with_capacity(map.len());
        for (name, value) in map {
            record.insert(name, field_value(value));
        }

        if features.is_empty() {
            features = record.keys().cloned().collect();
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatalensError::EmptyData(format!(
            "no records in {}",
            path.display()
        )));
    }

    Ok(InMemoryDataset::new(features, records))
}

/// Top-level all-numeric arrays arrive as backend numeric buffers, the way
/// columnar numeric features are surfaced; everything else maps directly.
fn field_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Array(ref items)
            if !items.is_empty() && items.iter().all(serde_json::Value::is_number) =>
        {
            Value::NumericBuffer(items.iter().filter_map(serde_json::Value::as_f64).collect())
        }
        other => Value::from(other),
    }
}

/// CSV cells are untyped text; every field loads as a string.
fn read_csv(path: &Path) -> Result<InMemoryDataset> {
    let file = File::open(path).map_err(|e| DatalensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() {
        return Err(DatalensError::EmptyData(format!(
            "no columns in {}",
            path.display()
        )));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = RawRecord::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let cell = row.get(i).unwrap_or("");
            record.insert(name.clone(), Value::String(cell.to_string()));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatalensError::EmptyData(format!(
            "no records in {}",
            path.display()
        )));
    }

    Ok(InMemoryDataset::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_split(root: &Path, rel: &str, file: &str, content: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_load_jsonl_split() {
        let tmp = TempDir::new().unwrap();
        write_split(
            tmp.path(),
            "smoltalk",
            "train.jsonl",
            "{\"text\": \"hello\", \"label\": 1}\n{\"text\": \"bye\", \"label\": 0}\n",
        );

        let store = LocalStore::new(tmp.path());
        let handle = store.load_split("smoltalk", None, "train").unwrap();

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.feature_names(), ["text", "label"]);
        let record = handle.record(0).unwrap();
        assert_eq!(record["text"], Value::String("hello".to_string()));
        assert_eq!(record["label"], Value::Number(1.into()));
    }

    #[test]
    fn test_jsonl_numeric_array_becomes_buffer() {
        let tmp = TempDir::new().unwrap();
        write_split(
            tmp.path(),
            "vectors",
            "train.jsonl",
            "{\"embedding\": [1.0, 2.0], \"tags\": [\"a\", \"b\"]}\n",
        );

        let store = LocalStore::new(tmp.path());
        let handle = store.load_split("vectors", None, "train").unwrap();

        let record = handle.record(0).unwrap();
        assert_eq!(record["embedding"], Value::NumericBuffer(vec![1.0, 2.0]));
        // Mixed and non-numeric arrays stay ordinary sequences.
        assert!(matches!(record["tags"], Value::Array(_)));
    }

    #[test]
    fn test_load_csv_split_as_text() {
        let tmp = TempDir::new().unwrap();
        write_split(
            tmp.path(),
            "tabular",
            "train.csv",
            "name,age\nAlice,30\nBob,25\n",
        );

        let store = LocalStore::new(tmp.path());
        let handle = store.load_split("tabular", None, "train").unwrap();

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.feature_names(), ["name", "age"]);
        let record = handle.record(1).unwrap();
        assert_eq!(record["age"], Value::String("25".to_string()));
    }

    #[test]
    fn test_config_names_sorted() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "multi/beta", "train.jsonl", "{\"x\": 1}\n");
        write_split(tmp.path(), "multi/alpha", "train.jsonl", "{\"x\": 1}\n");

        let store = LocalStore::new(tmp.path());
        assert_eq!(store.config_names("multi").unwrap(), ["alpha", "beta"]);
    }

    #[test]
    fn test_config_required_without_selection() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "multi/alpha", "train.jsonl", "{\"x\": 1}\n");

        let store = LocalStore::new(tmp.path());
        let Err(err) = store.load_split("multi", None, "train") else {
            panic!("expected error");
        };

        assert!(matches!(err, DatalensError::ConfigRequired { .. }));
    }

    #[test]
    fn test_load_with_config() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "multi/alpha", "train.jsonl", "{\"x\": 1}\n");
        write_split(tmp.path(), "multi/beta", "train.jsonl", "{\"x\": 2}\n");

        let store = LocalStore::new(tmp.path());
        let handle = store.load_split("multi", Some("beta"), "train").unwrap();

        assert_eq!(handle.record(0).unwrap()["x"], Value::Number(2.into()));
    }

    #[test]
    fn test_unknown_config() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "multi/alpha", "train.jsonl", "{\"x\": 1}\n");

        let store = LocalStore::new(tmp.path());
        let Err(err) = store.load_split("multi", Some("gamma"), "train") else {
            panic!("expected error");
        };

        assert!(matches!(err, DatalensError::UnknownConfig { .. }));
    }

    #[test]
    fn test_unknown_dataset() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let err = store.config_names("missing").unwrap_err();
        assert!(matches!(err, DatalensError::UnknownDataset(_)));
    }

    #[test]
    fn test_traversal_identifier_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        for bad in ["../etc", "a/../b", "/abs", "a//b", ".hidden"] {
            let Err(err) = store.load_split(bad, None, "train") else {
                panic!("expected error for {bad:?}");
            };
            assert!(
                matches!(err, DatalensError::InvalidIdentifier(_)),
                "expected InvalidIdentifier for {bad:?}"
            );
        }
    }

    #[test]
    fn test_missing_split() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "smoltalk", "train.jsonl", "{\"x\": 1}\n");

        let store = LocalStore::new(tmp.path());
        let Err(err) = store.load_split("smoltalk", None, "validation") else {
            panic!("expected error");
        };

        assert!(matches!(err, DatalensError::MissingSplit { .. }));
    }

    #[test]
    fn test_empty_split_file() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "hollow", "train.jsonl", "\n\n");

        let store = LocalStore::new(tmp.path());
        let Err(err) = store.load_split("hollow", None, "train") else {
            panic!("expected error");
        };

        assert!(matches!(err, DatalensError::EmptyData(_)));
    }

    #[test]
    fn test_jsonl_preferred_over_csv() {
        let tmp = TempDir::new().unwrap();
        write_split(tmp.path(), "both", "train.jsonl", "{\"kind\": \"jsonl\"}\n");
        write_split(tmp.path(), "both", "train.csv", "kind\ncsv\n");

        let store = LocalStore::new(tmp.path());
        let handle = store.load_split("both", None, "train").unwrap();

        assert_eq!(
            handle.record(0).unwrap()["kind"],
            Value::String("jsonl".to_string())
        );
    }
}
