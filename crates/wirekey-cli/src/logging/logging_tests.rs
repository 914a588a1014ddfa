#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("info", 0, false, "info" ; "configured level")]
#[test_case("warn", 1, false, "debug" ; "one verbose flag")]
#[test_case("warn", 3, false, "trace" ; "many verbose flags")]
#[test_case("debug", 0, true, "error" ; "quiet")]
#[test_case("info", 2, true, "error" ; "quiet wins over verbose")]
fn effective_level___flags(configured: &str, verbose: u8, quiet: bool, expected: &str) {
    assert_eq!(effective_level(configured, verbose, quiet), expected);
}
