use std::collections::BTreeMap;

use serde_json::Value;

/// Caller-supplied metadata attached to an indexed image.
///
/// Keys map to one multipart field each. A `BTreeMap` keeps the field order
/// deterministic across uploads.
pub type Metadata = BTreeMap<String, Value>;

/// Renders a metadata value as the flat text a multipart form field carries.
///
/// Strings are sent bare, without surrounding JSON quotes. Every other value
/// is serialized as compact JSON, so numbers and booleans arrive as `42` and
/// `true`, and nested arrays or objects arrive intact instead of as an opaque
/// placeholder.
pub fn coerce_to_form_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
