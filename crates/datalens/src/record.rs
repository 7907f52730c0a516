//! Record normalization.
//!
//! Both presentation adapters hand every record through [`normalize`] before
//! showing it, so the rules here are the single place where backend value
//! shapes meet JSON output.

use indexmap::IndexMap;

use crate::value::Value;

/// Field names whose string payloads are primary textual content.
///
/// These are copied into the normalized record byte-for-byte: no trimming,
/// wrapping, or truncation, and unicode exactly as stored. The rule is keyed
/// on both the field name and the runtime shape; a non-string value under
/// one of these names gets no special treatment.
pub const PRESERVED_TEXT_FIELDS: &[&str] = &["content", "message", "text", "prompt", "completion"];

/// A record as produced by a dataset backend. Field order is insertion order.
pub type RawRecord = IndexMap<String, Value>;

/// A JSON-safe record derived from a [`RawRecord`]. Field order matches the
/// source record.
pub type NormalizedRecord = IndexMap<String, serde_json::Value>;

/// Convert a raw record into a JSON-safe record.
///
/// Pure and deterministic: no I/O, no side effects, and structurally equal
/// output for equal input. Values are inspected one level deep only; nested
/// values inside mappings and sequences are carried over without the
/// top-level buffer conversion arm.
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    let mut normalized = NormalizedRecord::with_capacity(raw.len());

    for (name, value) in raw {
        let json = match value {
            // Primary textual payloads are copied verbatim.
            Value::String(text) if PRESERVED_TEXT_FIELDS.contains(&name.as_str()) => {
                serde_json::Value::String(text.clone())
            }
            // Backend numeric arrays flatten to plain JSON sequences.
            Value::NumericBuffer(_) => value.clone().into_json(),
            // Already JSON-shaped: pass through.
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_) => value.clone().into_json(),
            // No JSON image: fall back to the text rendering.
            Value::Bytes(_) => serde_json::Value::String(value.to_string()),
        };
        normalized.insert(name.clone(), json);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Vec<(&str, Value)>) -> RawRecord {
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_text_and_label_pass_through() {
        let raw = record(vec![
            ("text", Value::String("Hello\nworld".to_string())),
            ("label", Value::Number(1.into())),
        ]);

        let normalized = normalize(&raw);

        assert_eq!(
            serde_json::to_value(&normalized).unwrap(),
            json!({"text": "Hello\nworld", "label": 1})
        );
    }

    #[test]
    fn test_preserved_fields_keep_exact_bytes() {
        let text = "  leading and trailing  \n\n\tmixed\u{00a0}whitespace héllo 🌍 ";
        for name in PRESERVED_TEXT_FIELDS.iter().copied() {
            let raw = record(vec![(name, Value::String(text.to_string()))]);
            let normalized = normalize(&raw);
            assert_eq!(normalized[name], json!(text));
        }
    }

    #[test]
    fn test_empty_and_whitespace_strings_preserved() {
        let raw = record(vec![
            ("prompt", Value::String(String::new())),
            ("completion", Value::String("   ".to_string())),
        ]);

        let normalized = normalize(&raw);

        assert_eq!(normalized["prompt"], json!(""));
        assert_eq!(normalized["completion"], json!("   "));
    }

    #[test]
    fn test_content_with_number_follows_generic_rules() {
        let raw = record(vec![("content", Value::Number(42.into()))]);

        let normalized = normalize(&raw);

        // The verbatim rule is keyed on name AND string shape; a number
        // under "content" is an ordinary number.
        assert_eq!(normalized["content"], json!(42));
    }

    #[test]
    fn test_content_with_mapping_follows_generic_rules() {
        let nested = Value::from(json!({"role": "user", "turns": 2}));
        let raw = record(vec![("content", nested)]);

        let normalized = normalize(&raw);

        assert_eq!(normalized["content"], json!({"role": "user", "turns": 2}));
    }

    #[test]
    fn test_numeric_buffer_becomes_sequence() {
        let raw = record(vec![(
            "embedding",
            Value::NumericBuffer(vec![0.25, -1.5, 3.0]),
        )]);

        let normalized = normalize(&raw);

        assert_eq!(normalized["embedding"], json!([0.25, -1.5, 3.0]));
    }

    #[test]
    fn test_bytes_fall_back_to_string_rendering() {
        let raw = record(vec![("blob", Value::Bytes(vec![0xca, 0xfe]))]);

        let normalized = normalize(&raw);

        assert_eq!(normalized["blob"], json!("0xcafe"));
    }

    #[test]
    fn test_field_order_matches_source() {
        let raw = record(vec![
            ("zeta", Value::Bool(true)),
            ("alpha", Value::Null),
            ("mid", Value::String("m".to_string())),
        ]);

        let normalized = normalize(&raw);

        let keys: Vec<&String> = normalized.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let raw = record(vec![
            ("text", Value::String("same".to_string())),
            ("scores", Value::NumericBuffer(vec![1.0, 2.0])),
            ("blob", Value::Bytes(vec![1, 2, 3])),
        ]);

        let first = normalize(&raw);
        let second = normalize(&raw);

        assert_eq!(first, second);
        let first_keys: Vec<&String> = first.keys().collect();
        let second_keys: Vec<&String> = second.keys().collect();
        assert_eq!(first_keys, second_keys);
    }
}
