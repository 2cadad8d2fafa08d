//! Utility functions for common operations

use serde_json::Value;

/// Render a JSON scalar as text; nulls and compound values become `None`.
///
/// The raw feeds are inconsistent about types (a price may arrive as
/// `"1000000"` or `1000000`), so mapped cells are carried as text and
/// coerced during cleaning.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
