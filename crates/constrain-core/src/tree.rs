//! # Tree Projection — YAML to JSON
//!
//! Projects a parsed YAML document onto a JSON value tree. YAML has a richer
//! type system than JSON (tags, non-string mapping keys, arbitrary-precision
//! numbers); the projection handles the differences explicitly:
//!
//! - Mapping insertion order is preserved.
//! - Scalar mapping keys (strings, numbers, booleans) are stringified.
//! - Tagged values are unwrapped to their inner value.
//! - Non-scalar keys and non-finite floats are rejected.

use serde_json::Value;

use crate::error::TreeError;

/// Project a YAML value onto a JSON value tree.
///
/// # Errors
///
/// Returns [`TreeError::UnrepresentableFloat`] for NaN or infinite floats,
/// [`TreeError::NonScalarKey`] for sequence or mapping keys.
pub fn yaml_to_tree(yaml: &serde_yaml::Value) -> Result<Value, TreeError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => number_to_tree(n),
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, TreeError> = seq.iter().map(yaml_to_tree).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut members = serde_json::Map::new();
            for (k, v) in map {
                members.insert(key_to_string(k)?, yaml_to_tree(v)?);
            }
            Ok(Value::Object(members))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_tree(&tagged.value),
    }
}

fn number_to_tree(n: &serde_yaml::Number) -> Result<Value, TreeError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(serde_json::Number::from(i)))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(serde_json::Number::from(u)))
    } else if let Some(f) = n.as_f64() {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or(TreeError::UnrepresentableFloat(f))
    } else {
        Err(TreeError::UnsupportedNumber(n.to_string()))
    }
}

/// Stringify a scalar mapping key.
fn key_to_string(key: &serde_yaml::Value) -> Result<String, TreeError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(TreeError::NonScalarKey(format!("{other:?}"))),
    }
}
