//! Codec collaborator trait and the default JSON codec.
//!
//! The codec is one of the two external collaborators the engine delegates
//! to (the other being the [`Transport`](crate::Transport)). It covers two
//! concerns: parsing a raw string payload into a structured value, and
//! flattening a structured value into the flat string-keyed map used by
//! URL-encoded form bodies. Typed conversion into a declared return type
//! happens in the invocation engine via `serde`.

use crate::error::CodecError;
use indexmap::IndexMap;
use serde_json::Value;

/// Encodes and decodes payloads for the invocation engine.
pub trait Codec: Send + Sync {
    /// Parses a raw string payload into a structured value.
    fn parse(&self, raw: &str) -> Result<Value, CodecError>;

    /// Flattens a structured value into a flat string-keyed map.
    ///
    /// Used to merge a bare structured parameter into a form-urlencoded
    /// body. `null` fields are omitted from the result.
    fn flatten(&self, value: &Value) -> Result<IndexMap<String, String>, CodecError>;
}

/// The default codec, backed by `serde_json`.
///
/// Unknown fields in response payloads are ignored during typed decoding,
/// matching the lenient posture expected of a client-side mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Creates a new JSON codec.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        serde_json::from_str(raw)
            .map_err(|e| CodecError::with_source("failed to parse response payload", e))
    }

    fn flatten(&self, value: &Value) -> Result<IndexMap<String, String>, CodecError> {
        let Value::Object(fields) = value else {
            return Err(CodecError::new(format!(
                "cannot flatten non-object value into form fields: {value}"
            )));
        };

        let mut flat = IndexMap::with_capacity(fields.len());
        for (name, field) in fields {
            match field {
                Value::Null => {}
                Value::String(s) => {
                    flat.insert(name.clone(), s.clone());
                }
                Value::Bool(_) | Value::Number(_) => {
                    flat.insert(name.clone(), field.to_string());
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(CodecError::new(format!(
                        "cannot flatten nested field '{name}' into a form value"
                    )));
                }
            }
        }
        Ok(flat)
    }
}
