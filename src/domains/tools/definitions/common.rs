//! Common helpers shared across Webex tools.

use serde_json::Value;

use crate::domains::tools::handlers::MalformedArgument;

/// Whether an optional string argument was actually supplied.
///
/// Empty strings count as absent.
pub fn is_supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Parse an argument that carries a JSON array encoded as a string.
///
/// Anything that is not a JSON array, including valid JSON of another shape,
/// is rejected as `InvalidJson(name)`.
pub fn parse_json_list(raw: &str, name: &'static str) -> Result<Vec<Value>, MalformedArgument> {
    serde_json::from_str::<Vec<Value>>(raw).map_err(|_| MalformedArgument::InvalidJson(name))
}

/// Render an identifier from a JSON list as a path segment.
///
/// Strings are used as-is and numbers in their JSON form. Anything else is
/// not an identifier.
pub fn path_segment(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
