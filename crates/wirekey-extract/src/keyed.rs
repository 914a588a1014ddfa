//! Key-aware decoding
//!
//! [`KeyedObject`] is a read-only view of one JSON object that decodes values
//! key by key, so failures name the exact key that was missing or mistyped.
//! [`decode_keyed`] decodes a whole model through its [`WireKeys`] mapping.

use crate::parser::JsonObject;
use crate::serde_decode::{at_path, classify_serde_error, coding_path_of};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wirekey_core::{DecodeFailure, DecodeResult, WireKey, WireKeys};

/// Key-by-key reader over a JSON object
///
/// Fields are looked up by wire key. When built with [`KeyedObject::for_model`],
/// field names are translated through the model's [`WireKeys`] first.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wirekey_extract::{DecodeResult, JsonObject, KeyedObject, ObjectParser};
///
/// struct User {
///     id: i64,
///     full_name: String,
/// }
///
/// fn decode_user(object: &JsonObject) -> DecodeResult<User> {
///     let keys = KeyedObject::new(object);
///     Ok(User {
///         id: keys.decode("id")?,
///         full_name: keys.decode("full_name")?,
///     })
/// }
///
/// let doc = json!({"id": 1, "full_name": "Ann", "friend": {"id": 2, "full_name": "Bo"}});
/// let users = ObjectParser::new(decode_user).parse(&doc);
///
/// assert_eq!(users.len(), 2);
/// assert_eq!(users[1].full_name, "Bo");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyedObject<'a> {
    object: &'a JsonObject,
    keys: &'static [WireKey],
}

impl<'a> KeyedObject<'a> {
    /// View an object whose keys are used as-is
    pub fn new(object: &'a JsonObject) -> Self {
        Self { object, keys: &[] }
    }

    /// View an object through `M`'s field-to-wire-key mapping
    pub fn for_model<M: WireKeys>(object: &'a JsonObject) -> Self {
        Self {
            object,
            keys: M::WIRE_KEYS,
        }
    }

    /// The wire key a field is read from
    ///
    /// Fields missing from the mapping are read under their own name.
    pub fn wire_key<'k>(&self, field: &'k str) -> &'k str {
        self.keys
            .iter()
            .find(|key| key.field == field)
            .map_or(field, |key| key.wire)
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(self.wire_key(field))
    }

    /// Whether a field is present (a present `null` counts)
    pub fn contains(&self, field: &str) -> bool {
        self.object.contains_key(self.wire_key(field))
    }

    /// Decode a required field
    ///
    /// Missing keys fail with [`DecodeFailure::KeyNotFound`], `null` fails with
    /// [`DecodeFailure::ValueNotFound`] unless `T` accepts `null`, and other
    /// serde errors are reported at the field's wire key.
    pub fn decode<T: DeserializeOwned>(&self, field: &str) -> DecodeResult<T> {
        let key = self.wire_key(field);
        let value = self
            .object
            .get(key)
            .ok_or_else(|| DecodeFailure::key_not_found(key))?;

        if value.is_null() {
            return T::deserialize(Value::Null).map_err(|err| match classify_serde_error(&err) {
                DecodeFailure::ValueNotFound { expected, .. }
                | DecodeFailure::TypeMismatch { expected, .. } => {
                    DecodeFailure::value_not_found(key, expected)
                }
                other => other.nested_in(key),
            });
        }

        serde_path_to_error::deserialize(value).map_err(|err| {
            at_path(classify_serde_error(err.inner()), coding_path_of(err.path())).nested_in(key)
        })
    }

    /// Decode an optional field; absent and `null` both decode as `None`
    pub fn decode_optional<T: DeserializeOwned>(&self, field: &str) -> DecodeResult<Option<T>> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.decode(field).map(Some),
        }
    }
}

/// Decode a model whose JSON keys are given by its [`WireKeys`] mapping
///
/// Wire keys are renamed to field names before `T`'s `Deserialize`
/// implementation runs, so `T` should derive `Deserialize` without
/// `#[serde(rename)]` attributes. Keys outside the mapping are ignored; when a
/// wire key appears twice in the mapping, every field mapped to it receives
/// the value. Failure paths name the wire key (`{"id": "x"}` fails at `id`).
pub fn decode_keyed<T: DeserializeOwned + WireKeys>(object: &JsonObject) -> DecodeResult<T> {
    let mut renamed = JsonObject::new();
    for key in T::WIRE_KEYS {
        if let Some(value) = object.get(key.wire) {
            renamed.insert(key.field.to_string(), value.clone());
        }
    }

    serde_path_to_error::deserialize(Value::Object(renamed)).map_err(|err| {
        let mut path = coding_path_of(err.path());
        let failure = match classify_serde_error(err.inner()) {
            // Missing fields of nested values belong to other types' mappings
            DecodeFailure::KeyNotFound { key, context } if path.is_empty() => {
                DecodeFailure::KeyNotFound {
                    key: T::wire_key(&key).map_or(key, str::to_string),
                    context,
                }
            }
            other => other,
        };
        if let Some(wire) = path.first().and_then(|field| T::wire_key(field)) {
            path[0] = wire.to_string();
        }
        at_path(failure, path)
    })
}
