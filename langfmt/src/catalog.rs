//! Flattening nested message catalogs into dotted-path lookup tables.
//!
//! ```json
//! { "auth": { "failed": "These credentials do not match." } }
//! ```
//!
//! becomes `auth.failed -> "These credentials do not match."`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::Error;

/// Flattens a JSON object into a map from dotted path to message.
///
/// Arrays contribute their element index as a path segment. Values that
/// are neither strings nor containers are skipped.
pub fn flatten(catalog: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (key, value) in catalog {
        flatten_into(&mut out, key.clone(), value);
    }
    out
}

/// Parses JSON text and flattens it. The root must be an object.
pub fn flatten_str(json: &str) -> Result<BTreeMap<String, String>, Error> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(flatten(&map)),
        other => Err(Error::invalid_catalog(format!(
            "expected a JSON object at the root, found {}",
            kind_of(&other)
        ))),
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, path: String, value: &Value) {
    match value {
        Value::String(message) => {
            out.insert(path, message.clone());
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, format!("{}.{}", path, key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, format!("{}.{}", path, index), child);
            }
        }
        other => {
            tracing::debug!(
                path = %path,
                kind = kind_of(other),
                "skipping non-string catalog value"
            );
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_objects() {
        let flat = flatten_str(
            r#"{
                "welcome": "Welcome, :name",
                "auth": { "failed": "Nope", "throttle": { "short": "Slow down" } }
            }"#,
        )
        .unwrap();

        assert_eq!(flat.len(), 3);
        assert_eq!(flat["welcome"], "Welcome, :name");
        assert_eq!(flat["auth.failed"], "Nope");
        assert_eq!(flat["auth.throttle.short"], "Slow down");
    }

    #[test]
    fn test_flatten_arrays_use_indices() {
        let flat = flatten_str(r#"{ "days": ["Mon", "Tue"] }"#).unwrap();
        assert_eq!(flat["days.0"], "Mon");
        assert_eq!(flat["days.1"], "Tue");
    }

    #[test]
    fn test_flatten_skips_scalars() {
        let flat = flatten_str(r#"{ "a": 1, "b": null, "c": true, "d": "kept" }"#).unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["d"], "kept");
    }

    #[test]
    fn test_flatten_rejects_non_object_root() {
        let err = flatten_str(r#"["a"]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_flatten_reports_json_syntax_errors() {
        let err = flatten_str("{ invalid").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
