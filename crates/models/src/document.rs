//! Helpers for rendering stored rows as flat JSON documents.
//!
//! Clients see every record as one object whose `_id` key carries the
//! store-assigned identifier, with the remaining keys exactly as persisted.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ModelError;

/// Key under which the record identifier is rendered.
pub const ID_KEY: &str = "_id";

/// Render `fields` as a document with `_id` set to `id`.
pub fn render(id: Uuid, fields: &Map<String, Value>) -> Value {
    let mut doc = fields.clone();
    doc.insert(ID_KEY.to_string(), Value::String(id.to_string()));
    Value::Object(doc)
}

/// Read a string-valued key; any other JSON type counts as absent.
pub fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// View a stored JSON column as an object, treating anything else as empty.
pub fn as_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

/// Accept a request body only when it is a JSON object.
pub fn into_object(value: Value, what: &str) -> Result<Map<String, Value>, ModelError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::Validation(format!("{what} must be a JSON object, got {}", type_name(&other)))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
