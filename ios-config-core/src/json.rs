//! Key-path helpers for YANG-modelled JSON documents.
//!
//! Every helper treats a missing key, a non-object intermediate value or a
//! value of the wrong type as absence.

use serde_json::Value;

/// Walk a nested key path and return the terminal value if every key resolves.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for segment in path {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

/// Whether `value` is an object that carries `key`, regardless of its value.
pub fn has_key(value: &Value, key: &str) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key(key))
}

/// String leaf at `path`.
pub fn get_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    get_path(value, path).and_then(Value::as_str)
}

/// Unsigned integer leaf at `path`.
///
/// RESTCONF encodes small integers as JSON numbers but 64-bit ones as strings,
/// so a decimal string is accepted too.
pub fn get_u32(value: &Value, path: &[&str]) -> Option<u32> {
    get_path(value, path).and_then(as_u32)
}

/// Interpret a JSON number or decimal string as `u32`.
pub fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
