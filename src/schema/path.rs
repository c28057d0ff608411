//! Dotted-path access into JSON records.
//!
//! Field names like `address.street` target a key of a nested object. The
//! accessor never mutates its input and never panics: a missing
//! intermediate reads as `None` and writes create the intermediate.

use serde_json::{Map, Value};

/// Read the value at `path`, descending one object level per `.` segment.
pub fn get<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Return a copy of `record` with the value at `path` replaced.
///
/// Single-segment paths replace a top-level key; two-segment paths replace
/// the leaf inside the nested object, preserving its sibling keys. Deeper
/// nesting is not supported (no schema uses it).
pub fn set(record: &Value, path: &str, value: Value) -> Value {
    let mut top = record.as_object().cloned().unwrap_or_default();
    match path.split_once('.') {
        None => {
            top.insert(path.to_string(), value);
        }
        Some((parent, child)) => {
            let mut nested = top
                .get(parent)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_else(Map::new);
            nested.insert(child.to_string(), value);
            top.insert(parent.to_string(), Value::Object(nested));
        }
    }
    Value::Object(top)
}
