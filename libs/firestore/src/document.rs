//! Conversion between serde-able structs and Firestore's typed values.
//!
//! The REST surface wraps every field in a type tag, e.g.
//! `{"name": {"stringValue": "Acme"}, "completed": {"booleanValue": false}}`.
//! This module encodes a struct's JSON representation into that shape and
//! decodes it back, so repositories work with plain `Serialize`/`Deserialize`
//! types.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

use crate::error::{FirestoreError, FirestoreResult};

/// Raw Firestore REST document.
#[derive(Debug, serde::Deserialize)]
pub struct Document {
    /// Full resource name, e.g.
    /// `projects/p/databases/(default)/documents/companies/<id>`
    pub name: String,
    /// Typed field map; absent for empty documents
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Extract the document id (last path segment) from a resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Encode a struct into a Firestore field map.
///
/// The value must serialize to a JSON object; scalars and sequences cannot
/// be stored as document roots.
pub fn to_fields<T: Serialize>(value: &T) -> FirestoreResult<Map<String, Value>> {
    let json = serde_json::to_value(value).map_err(|e| FirestoreError::Encode(e.to_string()))?;

    match json {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, encode_value(value)))
            .collect()),
        other => Err(FirestoreError::Encode(format!(
            "expected a JSON object at the document root, got {}",
            value_kind(&other)
        ))),
    }
}

/// Decode a Firestore field map into a struct.
pub fn from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> FirestoreResult<T> {
    let mut json = Map::with_capacity(fields.len());
    for (key, value) in fields {
        json.insert(key.clone(), decode_value(&key, value)?);
    }

    serde_json::from_value(Value::Object(json)).map_err(|e| FirestoreError::Decode(e.to_string()))
}

/// Decode a whole REST document into a struct.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> FirestoreResult<T> {
    from_fields(doc.fields)
}

fn encode_value(value: Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            // Firestore carries 64-bit integers as decimal strings
            if n.is_i64() || n.is_u64() {
                json!({ "integerValue": n.to_string() })
            } else {
                json!({ "doubleValue": n })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.into_iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key, encode_value(value)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

fn decode_value(field: &str, value: Value) -> FirestoreResult<Value> {
    let Value::Object(mut tagged) = value else {
        return Err(FirestoreError::Decode(format!(
            "field '{}' is not a typed value",
            field
        )));
    };

    // A typed value holds exactly one type tag
    let Some((tag, inner)) = tagged.iter_mut().next().map(|(k, v)| (k.clone(), v.take())) else {
        return Err(FirestoreError::Decode(format!(
            "field '{}' has no value type tag",
            field
        )));
    };

    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" => Ok(inner),
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner),
        "integerValue" => match inner {
            // The REST encoding is a decimal string; tolerate bare numbers too
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|_| {
                    FirestoreError::Decode(format!("field '{}' has a malformed integer", field))
                }),
            Value::Number(n) => Ok(Value::Number(n)),
            _ => Err(FirestoreError::Decode(format!(
                "field '{}' has a malformed integer",
                field
            ))),
        },
        "arrayValue" => {
            let items = match inner {
                Value::Object(mut obj) => match obj.remove("values") {
                    Some(Value::Array(items)) => items,
                    None => Vec::new(),
                    _ => {
                        return Err(FirestoreError::Decode(format!(
                            "field '{}' has a malformed array",
                            field
                        )));
                    }
                },
                _ => {
                    return Err(FirestoreError::Decode(format!(
                        "field '{}' has a malformed array",
                        field
                    )));
                }
            };
            let decoded: FirestoreResult<Vec<Value>> = items
                .into_iter()
                .map(|item| decode_value(field, item))
                .collect();
            Ok(Value::Array(decoded?))
        }
        "mapValue" => {
            let fields = match inner {
                Value::Object(mut obj) => match obj.remove("fields") {
                    Some(Value::Object(fields)) => fields,
                    None => Map::new(),
                    _ => {
                        return Err(FirestoreError::Decode(format!(
                            "field '{}' has a malformed map",
                            field
                        )));
                    }
                },
                _ => {
                    return Err(FirestoreError::Decode(format!(
                        "field '{}' has a malformed map",
                        field
                    )));
                }
            };
            let mut decoded = Map::with_capacity(fields.len());
            for (key, value) in fields {
                decoded.insert(key, decode_value(field, value)?);
            }
            Ok(Value::Object(decoded))
        }
        other => Err(FirestoreError::Decode(format!(
            "field '{}' has unsupported value type '{}'",
            field, other
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
