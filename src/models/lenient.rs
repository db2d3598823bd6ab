//! Tolerant deserializers for loosely typed record fields
//!
//! Backend documents are not schema-checked, so a text field may hold a
//! number, null or even a nested object. Scalars are kept as text; anything
//! else is dropped so one odd field cannot fail the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text of a scalar value, `None` for null, objects and arrays
pub fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!(value = %other, "non-scalar text field ignored");
            None
        }
    }
}

/// `deserialize_with` for `String` fields; unusable values become empty
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// `deserialize_with` for `Option<String>` fields
pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}
