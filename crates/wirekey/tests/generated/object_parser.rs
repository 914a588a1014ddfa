// @generated by wirekey. Do not edit by hand.
//
// Regenerate with `wirekey generate`. Add a field's JSON key with a
// `/// @json <key>` doc line on the field.

#![allow(dead_code)]

use ::wirekey::serde::de::DeserializeOwned;
use ::wirekey::{JsonInput, KeyedParser, ObjectParser, WireKeys};
use crate::models::User;
use crate::models::LineItem;
use crate::models::Ping;

/// Parser that finds every `T` anywhere in a JSON document.
pub fn object_parser<T>() -> KeyedParser<T>
where
    T: DeserializeOwned + WireKeys,
{
    ObjectParser::keyed()
}

/// Every `T` in `input`, in document order. Objects that do not decode are skipped.
pub fn parse_models<'a, T>(input: impl Into<JsonInput<'a>>) -> Vec<T>
where
    T: DeserializeOwned + WireKeys,
{
    object_parser::<T>().parse_input(input)
}

/// Like [`parse_models`], logging each object that does not decode.
pub fn parse_models_logged<'a, T>(input: impl Into<JsonInput<'a>>) -> Vec<T>
where
    T: DeserializeOwned + WireKeys,
{
    object_parser::<T>().with_log_errors(true).parse_input(input)
}

impl ::wirekey::WireKeys for User {
    const WIRE_KEYS: &'static [::wirekey::WireKey] = &[
        ::wirekey::WireKey::new("id", "id"),
        ::wirekey::WireKey::new("full_name", "fullName"),
        ::wirekey::WireKey::new("email", "email"),
    ];
}

impl ::wirekey::WireKeys for LineItem {
    const WIRE_KEYS: &'static [::wirekey::WireKey] = &[
        ::wirekey::WireKey::new("sku", "sku"),
        ::wirekey::WireKey::new("quantity", "qty"),
    ];
}

impl ::wirekey::WireKeys for Ping {
    const WIRE_KEYS: &'static [::wirekey::WireKey] = &[];
}
