//! Reduce differently-wrapped tool-call payloads to one flat field map.
//!
//! Agent frameworks wrap tool arguments in different ways. The wrappers
//! understood here are tried in a fixed order and the first one present
//! wins:
//!
//! 1. `{"root": {...}}`
//! 2. `{"args": {...}}`
//! 3. `{"function": {"arguments": "<json>"}}`
//! 4. the flat field map itself
//!
//! A JSON string payload is parsed before any of the above. Whatever the
//! shape, the resulting field map must not be empty.

use crate::ToolError;
use serde_json::{Map, Value};
use tracing::debug;

/// Canonical, wrapper-independent field map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A wrapper interpretation: declines with `None` when its shape is absent.
type Unwrapper = fn(&Map<String, Value>) -> Option<Result<Map<String, Value>, ToolError>>;

const UNWRAPPERS: [(&str, Unwrapper); 4] = [
    ("root", unwrap_root),
    ("args", unwrap_args),
    ("function.arguments", unwrap_function_arguments),
    ("flat", unwrap_flat),
];

/// Normalize a raw payload into [`Fields`].
pub fn normalize(raw: &Value) -> Result<Fields, ToolError> {
    let parsed;
    let value = match raw {
        Value::String(text) => {
            parsed = parse_json(text)?;
            &parsed
        }
        other => other,
    };

    let Value::Object(map) = value else {
        return Err(ToolError::malformed(format!(
            "expected a JSON object, got {}",
            json_type(value)
        )));
    };

    for (shape, unwrap) in UNWRAPPERS {
        if let Some(result) = unwrap(map) {
            let fields = result?;
            if fields.is_empty() {
                return Err(ToolError::malformed(format!("`{shape}` payload has no fields")));
            }
            debug!(shape, fields = fields.len(), "payload normalized");
            return Ok(Fields(fields));
        }
    }

    Err(ToolError::malformed("unrecognized payload shape"))
}

/// Normalize a payload given as JSON text.
pub fn normalize_str(raw: &str) -> Result<Fields, ToolError> {
    normalize(&parse_json(raw)?)
}

fn unwrap_root(map: &Map<String, Value>) -> Option<Result<Map<String, Value>, ToolError>> {
    map.get("root").map(|inner| as_mapping("root", inner))
}

fn unwrap_args(map: &Map<String, Value>) -> Option<Result<Map<String, Value>, ToolError>> {
    map.get("args").map(|inner| as_mapping("args", inner))
}

fn unwrap_function_arguments(
    map: &Map<String, Value>,
) -> Option<Result<Map<String, Value>, ToolError>> {
    let arguments = map.get("function")?.as_object()?.get("arguments")?;
    Some(as_mapping("function.arguments", arguments))
}

fn unwrap_flat(map: &Map<String, Value>) -> Option<Result<Map<String, Value>, ToolError>> {
    Some(Ok(map.clone()))
}

/// Accept an object, or a string holding a JSON object.
fn as_mapping(wrapper: &str, value: &Value) -> Result<Map<String, Value>, ToolError> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::String(text) => match parse_json(text)? {
            Value::Object(map) => Ok(map),
            other => Err(ToolError::malformed_field(
                wrapper,
                format!("`{wrapper}` must encode a JSON object, got {}", json_type(&other)),
            )),
        },
        other => Err(ToolError::malformed_field(
            wrapper,
            format!("`{wrapper}` must be a JSON object, got {}", json_type(other)),
        )),
    }
}

fn parse_json(text: &str) -> Result<Value, ToolError> {
    serde_json::from_str(text).map_err(|e| ToolError::malformed(format!("invalid JSON: {e}")))
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
