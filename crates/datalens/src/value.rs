//! Field values produced by dataset backends.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Number;

/// A single field value as surfaced by a dataset backend.
///
/// This is a closed set of shapes rather than a dynamically probed object:
/// the conversion step matches on variants, never on the presence of a
/// capability at runtime. Every variant except [`Value::Bytes`] has a
/// direct JSON image.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer or float, kept in JSON's number representation.
    Number(Number),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Insertion-ordered mapping.
    Object(IndexMap<String, Value>),
    /// Backend numeric array (columnar numeric feature data).
    NumericBuffer(Vec<f64>),
    /// Backend binary payload with no JSON image.
    Bytes(Vec<u8>),
}

impl Value {
    /// Convert to a JSON value.
    ///
    /// Numeric buffers flatten to arrays of numbers; bytes render as their
    /// hex string form. Non-finite buffer elements have no JSON number
    /// representation and become null.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Value::into_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into_json())).collect(),
            ),
            Value::NumericBuffer(buffer) => serde_json::Value::Array(
                buffer
                    .into_iter()
                    .map(|n| {
                        Number::from_f64(n)
                            .map_or(serde_json::Value::Null, serde_json::Value::Number)
                    })
                    .collect(),
            ),
            Value::Bytes(_) => serde_json::Value::String(self.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            other => write!(f, "{}", other.clone().into_json()),
        }
    }
}
