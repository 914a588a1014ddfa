//! Tests for `#[derive(WireKeys)]` used through the facade

#![allow(non_snake_case)]

use serde_json::json;
use wirekey::prelude::*;
use wirekey::{DecodeFailure, decode_keyed};

#[derive(Debug, PartialEq, Deserialize, WireKeys)]
struct User {
    #[wirekey(json = "user_id")]
    id: i64,

    /// @json fullName
    full_name: String,

    nickname: Option<String>,
}

#[derive(Debug, PartialEq, Deserialize, WireKeys)]
#[wirekey(strict)]
struct Tag {
    #[wirekey(json = "label")]
    name: String,
}

#[derive(Debug, PartialEq, Deserialize, WireKeys)]
#[wirekey(strict)]
struct Badge {
    /// @json
    level: u8,
}

#[derive(Debug, PartialEq, Deserialize, WireKeys)]
struct Empty {}

#[test]
fn derive___table_in_declaration_order() {
    assert_eq!(
        User::WIRE_KEYS,
        &[
            WireKey::new("id", "user_id"),
            WireKey::new("full_name", "fullName"),
            WireKey::new("nickname", "nickname"),
        ]
    );
    assert_eq!(Tag::wire_key("name"), Some("label"));
    assert!(Empty::WIRE_KEYS.is_empty());
}

#[test]
fn derive___keyed_parser___reads_wire_keys() {
    let doc = json!({
        "members": [
            {"user_id": 1, "fullName": "Ann", "nickname": "a"},
            {"user_id": 2, "fullName": "Bo", "tags": [{"label": "x"}]}
        ]
    });

    let users: Vec<User> = ObjectParser::keyed().parse(&doc);
    let tags: Vec<Tag> = ObjectParser::keyed().parse(&doc);

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].nickname.as_deref(), Some("a"));
    assert_eq!(users[1].full_name, "Bo");
    assert_eq!(tags, vec![Tag { name: "x".to_string() }]);
}

#[test]
fn derive___field_names_are_not_wire_keys() {
    // Only the mapped keys are read
    let doc = json!({"id": 1, "full_name": "Ann"});

    let users: Vec<User> = ObjectParser::keyed().parse(&doc);

    assert!(users.is_empty());
}

#[test]
fn derive___bare_json_annotation___names_the_field() {
    // Accepted under strict, so the bare line counts as a key
    assert_eq!(Badge::WIRE_KEYS, &[WireKey::new("level", "level")]);
}

#[test]
fn decode_keyed___wrong_type___path_is_wire_key() {
    let object = json!({"user_id": "seven", "fullName": "Ann"});
    let object = object.as_object().unwrap();

    let failure = decode_keyed::<User>(object).unwrap_err();

    assert_eq!(failure.kind(), "type_mismatch");
    assert_eq!(failure.context().path_string(), "user_id");
}

#[test]
fn decode_keyed___missing_key___reports_wire_key() {
    let object = json!({"user_id": 1});
    let object = object.as_object().unwrap();

    let failure = decode_keyed::<User>(object).unwrap_err();

    assert!(
        matches!(&failure, DecodeFailure::KeyNotFound { key, .. } if key == "fullName"),
        "{failure:?}"
    );
}

#[test]
fn KeyedObject___for_model___translates_field_names() {
    let object = json!({"user_id": 7, "fullName": "Ann"});
    let object = object.as_object().unwrap();

    let keys = KeyedObject::for_model::<User>(object);

    assert_eq!(keys.decode::<i64>("id").unwrap(), 7);
    assert!(keys.contains("full_name"));
    assert!(!keys.contains("nickname"));
}
