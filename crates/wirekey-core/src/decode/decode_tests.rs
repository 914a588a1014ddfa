#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// DecodeContext tests

#[test]
fn DecodeContext___path_string___joins_keys_with_dots() {
    let context = DecodeContext::new(vec!["friend".into(), "id".into()], "bad");

    assert_eq!(context.path_string(), "friend.id");
}

#[test]
fn DecodeContext___path_string___empty_path_is_root() {
    let context = DecodeContext::root("bad");

    assert_eq!(context.path_string(), "<root>");
}

#[test]
fn DecodeContext___nested_in___prepends_parent() {
    let context = DecodeContext::at("id", "bad").nested_in("friend");

    assert_eq!(context.coding_path, vec!["friend", "id"]);
}

#[test]
fn DecodeContext___display___includes_description_and_path() {
    let context = DecodeContext::at("id", "expected integer");

    assert_eq!(context.to_string(), "expected integer (at id)");
}

// DecodeFailure tests

#[test_case(DecodeFailure::key_not_found("id"), "key_not_found")]
#[test_case(DecodeFailure::type_mismatch("id", "integer", "found string"), "type_mismatch")]
#[test_case(DecodeFailure::value_not_found("id", "integer"), "value_not_found")]
#[test_case(DecodeFailure::data_corrupted("garbage"), "data_corrupted")]
fn DecodeFailure___kind___names_variant(failure: DecodeFailure, expected: &str) {
    assert_eq!(failure.kind(), expected);
}

#[test]
fn DecodeFailure___type_mismatch___references_key_in_display() {
    let failure = DecodeFailure::type_mismatch("id", "integer", "found string \"not-an-int\"");

    let display = failure.to_string();

    assert!(display.starts_with("type mismatch"));
    assert!(display.contains("(at id)"));
    assert!(display.contains("integer"));
}

#[test]
fn DecodeFailure___key_not_found___names_key() {
    let failure = DecodeFailure::key_not_found("full_name");

    assert!(matches!(
        &failure,
        DecodeFailure::KeyNotFound { key, .. } if key == "full_name"
    ));
    assert!(failure.to_string().contains("\"full_name\""));
}

#[test]
fn DecodeFailure___value_not_found___points_at_key() {
    let failure = DecodeFailure::value_not_found("id", "integer");

    assert_eq!(failure.context().coding_path, vec!["id"]);
    assert!(failure.context().debug_description.contains("null"));
}

#[test]
fn DecodeFailure___nested_in___preserves_variant_and_extends_path() {
    let failure = DecodeFailure::type_mismatch("id", "integer", "found bool").nested_in("owner");

    assert_eq!(failure.kind(), "type_mismatch");
    assert_eq!(failure.context().path_string(), "owner.id");
}
