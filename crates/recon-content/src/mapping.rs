//! The in-memory document model
//!
//! Every document is a string-keyed mapping whose values are scalars,
//! nested mappings or sequences. `serde_json::Value` is the tagged union.

pub use serde_json::Value;

use crate::error::{Error, Result};

/// A configuration document or a subtree of one.
pub type Mapping = serde_json::Map<String, Value>;

/// Accept a decoded document root as a mapping.
///
/// A `null` root (an empty or comment-only YAML document) is an empty
/// mapping; any other non-mapping root is rejected.
pub fn into_mapping(root: Value, format: &str) -> Result<Mapping> {
    match root {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::parse(
            format,
            format!("top-level value must be a mapping, found {}", kind_name(&other)),
        )),
    }
}

/// Rebuild a value with every mapping's keys in sorted order.
///
/// Rendering goes through this so output never depends on the map's
/// iteration order.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(canonical_mapping(map)),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// [`canonicalize`] for a mapping.
pub fn canonical_mapping(map: &Mapping) -> Mapping {
    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();
    let mut sorted = Mapping::new();
    for key in keys {
        if let Some(v) = map.get(key) {
            sorted.insert(key.clone(), canonicalize(v));
        }
    }
    sorted
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
