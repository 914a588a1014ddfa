//! Decoding through `serde`, with errors mapped onto [`DecodeFailure`]

use crate::parser::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use wirekey_core::{DecodeContext, DecodeFailure, DecodeResult};

/// Decode an object with `T`'s `Deserialize` implementation
///
/// Object keys are matched against whatever names `T`'s derive expects
/// (field names, or `#[serde(rename)]` values). The coding path of a failure
/// leads to the value that did not decode (`items.0.id`); a missing field is
/// reported against the object that lacks it.
pub fn decode_serde<T: DeserializeOwned>(object: &JsonObject) -> DecodeResult<T> {
    serde_path_to_error::deserialize(Value::Object(object.clone()))
        .map_err(|err| at_path(classify_serde_error(err.inner()), coding_path_of(err.path())))
}

/// Path segments as coding path keys; array positions become their index
pub(crate) fn coding_path_of(path: &Path) -> Vec<String> {
    path.iter()
        .map(|segment| match segment {
            Segment::Seq { index } => index.to_string(),
            Segment::Map { key } => key.clone(),
            Segment::Enum { variant } => variant.clone(),
            Segment::Unknown => "?".to_string(),
        })
        .collect()
}

/// Place a root-level failure under `path`
pub(crate) fn at_path(failure: DecodeFailure, path: Vec<String>) -> DecodeFailure {
    path.into_iter()
        .rev()
        .fold(failure, |failure, key| failure.nested_in(key))
}

/// Map a `serde_json` data error onto the decode failure taxonomy
///
/// - `missing field` becomes [`DecodeFailure::KeyNotFound`]
/// - `invalid type: null` becomes [`DecodeFailure::ValueNotFound`]
/// - any other `invalid type` becomes [`DecodeFailure::TypeMismatch`]
/// - everything else (invalid values, lengths, variants, custom errors, syntax)
///   becomes [`DecodeFailure::DataCorrupted`]
pub fn classify_serde_error(err: &serde_json::Error) -> DecodeFailure {
    let message = err.to_string();

    if let Some(field) = backticked(&message, "missing field `") {
        return DecodeFailure::KeyNotFound {
            key: field.to_string(),
            context: DecodeContext::root(message.clone()),
        };
    }

    if message.starts_with("invalid type: null") {
        return DecodeFailure::ValueNotFound {
            expected: expected_of(&message),
            context: DecodeContext::root(message.clone()),
        };
    }

    if message.starts_with("invalid type:") {
        return DecodeFailure::TypeMismatch {
            expected: expected_of(&message),
            context: DecodeContext::root(message.clone()),
        };
    }

    DecodeFailure::DataCorrupted {
        context: DecodeContext::root(message),
    }
}

/// Text between `prefix` and the next backtick
fn backticked<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(prefix)?;
    let end = rest.find('`')?;
    Some(&rest[..end])
}

/// The `expected ...` tail of a serde error message
fn expected_of(message: &str) -> String {
    let tail = match message.rfind("expected ") {
        Some(start) => &message[start + "expected ".len()..],
        None => return "a different type".to_string(),
    };
    // serde_json appends " at line N column M" when the error has a position
    match tail.find(" at line ") {
        Some(end) => tail[..end].to_string(),
        None => tail.to_string(),
    }
}
