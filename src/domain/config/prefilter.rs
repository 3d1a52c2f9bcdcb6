//! Translation of hyphenated external option names to record field names.

use serde_json::Value;

/// Keep only hyphenated keys, rewriting `-` to `_`, through nested mappings
/// and mappings held in lists. Scalars pass through unchanged.
pub fn prefilter(value: &Value) -> Value {
    match value {
        Value::Object(mapping) => Value::Object(
            mapping
                .iter()
                .filter(|(key, _)| key.contains('-'))
                .map(|(key, nested)| (key.replace('-', "_"), prefilter(nested)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(prefilter).collect()),
        scalar => scalar.clone(),
    }
}
