//! Truthiness rules for loosely-typed event fields.
//!
//! Upstream callers (API Gateway, Step Functions, hand-written test events)
//! send whatever JSON they like. A field only counts as "present" when it is
//! truthy, so empty strings, zeroes, `false` and `null` all fall through to
//! the next source.

use serde_json::Value;

/// Returns true when the value should be treated as present.
///
/// `null`, `false`, `0` and `""` are falsy. Everything else is truthy,
/// including empty objects and arrays.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the value only if it is truthy.
pub fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

/// Coerces a field value to text.
///
/// Strings are taken verbatim; any other value is rendered as compact JSON.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
