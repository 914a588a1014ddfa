//! Depth-first extraction of models from untyped JSON
//!
//! The walk visits every node of the document in pre-order:
//!
//! - **Object**: try to decode the whole object as the model; a success is
//!   emitted before anything found inside the object. Then every value of the
//!   object is visited in insertion order (keys are never visited).
//! - **Array**: never decoded itself; elements are visited in order.
//! - **Scalar / null**: contributes nothing.
//!
//! Decode failures never stop the walk. They are logged through `tracing` when
//! the parser was built with [`ObjectParser::with_log_errors`], and silently
//! dropped otherwise.
//!
//! The walk keeps its own work stack, so deeply nested documents do not grow
//! the call stack. Documents parsed from raw bytes are additionally limited by
//! `serde_json`'s nesting limit of 128 levels; deeper input is treated as
//! malformed and yields no models.

use crate::keyed::decode_keyed;
use crate::serde_decode::decode_serde;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use wirekey_core::{DecodeFailure, DecodeResult, WireKeys};

/// A JSON object, the only node kind a model is ever decoded from
pub type JsonObject = Map<String, Value>;

/// Plain function pointer decoder, the default decoder type of [`ObjectParser`]
pub type DecodeFn<T> = fn(&JsonObject) -> DecodeResult<T>;

/// Parser that decodes models through their [`WireKeys`]
pub type KeyedParser<T> = ObjectParser<T, DecodeFn<T>>;

/// Input accepted by [`ObjectParser::parse_input`]
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    /// Raw JSON bytes, parsed before walking
    Bytes(&'a [u8]),

    /// JSON text, parsed before walking
    Text(&'a str),

    /// An already materialized document
    Value(&'a Value),
}

impl<'a> From<&'a [u8]> for JsonInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        JsonInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for JsonInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        JsonInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    fn from(value: &'a Value) -> Self {
        JsonInput::Value(value)
    }
}

/// Collects every decodable `T` found anywhere in a JSON document
///
/// `D` is the decode function applied to each object node. It receives the
/// object only, never arrays or scalars.
pub struct ObjectParser<T, D = DecodeFn<T>> {
    decode: D,
    log_errors: bool,
    _model: PhantomData<fn() -> T>,
}

impl<T, D> ObjectParser<T, D>
where
    D: Fn(&JsonObject) -> DecodeResult<T>,
{
    /// Create a parser around a decode function, with error logging disabled
    pub fn new(decode: D) -> Self {
        Self {
            decode,
            log_errors: false,
            _model: PhantomData,
        }
    }

    /// Enable or disable logging of decode failures
    pub fn with_log_errors(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    /// Whether decode failures are logged
    pub fn log_errors(&self) -> bool {
        self.log_errors
    }

    /// Extract models from bytes, text, or an already parsed value
    pub fn parse_input<'a>(&self, input: impl Into<JsonInput<'a>>) -> Vec<T> {
        match input.into() {
            JsonInput::Bytes(bytes) => self.parse_slice(bytes),
            JsonInput::Text(text) => self.parse_slice(text.as_bytes()),
            JsonInput::Value(value) => self.parse(value),
        }
    }

    /// Extract models from raw JSON bytes
    ///
    /// Input that is not valid JSON yields an empty result.
    pub fn parse_slice(&self, bytes: &[u8]) -> Vec<T> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => self.parse(&value),
            Err(err) => {
                if self.log_errors {
                    tracing::warn!(error = %err, "input is not valid JSON, nothing extracted");
                }
                Vec::new()
            }
        }
    }

    /// Extract models from JSON text
    pub fn parse_str(&self, text: &str) -> Vec<T> {
        self.parse_slice(text.as_bytes())
    }

    /// Extract models from a parsed document
    pub fn parse(&self, value: &Value) -> Vec<T> {
        let mut models = Vec::new();
        let mut pending = vec![value];

        while let Some(node) = pending.pop() {
            match node {
                Value::Object(object) => {
                    if let Some(model) = self.decode_object(object) {
                        models.push(model);
                    }
                    // Reversed so the first entry is popped first.
                    pending.extend(object.values().rev());
                }
                Value::Array(items) => pending.extend(items.iter().rev()),
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
            }
        }

        models
    }

    /// Decode a single object, logging the failure if enabled
    pub fn decode_object(&self, object: &JsonObject) -> Option<T> {
        match (self.decode)(object) {
            Ok(model) => Some(model),
            Err(failure) => {
                if self.log_errors {
                    log_failure(object, &failure);
                }
                None
            }
        }
    }
}

impl<T: DeserializeOwned> ObjectParser<T> {
    /// Parser that decodes objects with `T`'s `Deserialize` implementation
    pub fn serde() -> Self {
        Self::new(decode_serde::<T>)
    }
}

impl<T: DeserializeOwned + WireKeys> ObjectParser<T> {
    /// Parser that reads wire keys through `T`'s [`WireKeys`] mapping
    pub fn keyed() -> Self {
        Self::new(decode_keyed::<T>)
    }
}

impl<T: DeserializeOwned> Default for ObjectParser<T> {
    fn default() -> Self {
        Self::serde()
    }
}

impl<T, D> fmt::Debug for ObjectParser<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectParser")
            .field("model", &std::any::type_name::<T>())
            .field("log_errors", &self.log_errors)
            .finish_non_exhaustive()
    }
}

/// Extract every `T` decodable by `decode` from `value`, without logging
pub fn extract<T, D>(value: &Value, decode: D) -> Vec<T>
where
    D: Fn(&JsonObject) -> DecodeResult<T>,
{
    ObjectParser::new(decode).parse(value)
}

fn log_failure(object: &JsonObject, failure: &DecodeFailure) {
    let fragment = serde_json::to_string(object)
        .unwrap_or_else(|err| format!("<unprintable object: {err}>"));

    tracing::warn!(
        kind = failure.kind(),
        path = %failure.context().path_string(),
        fragment = %fragment,
        "object did not decode: {failure}"
    );
}
