//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use cold::{Scanner, count_from, is_cold};
use test_case::test_case;

#[test_case(-1, true ; "minus one")]
#[test_case(0, false ; "zero")]
#[test_case(1, false ; "plus one")]
#[test_case(-100_000, true ; "lower bound")]
#[test_case(1_000_000, false ; "upper bound")]
fn test_is_cold(reading: i64, expected: bool) {
    assert_eq!(is_cold(reading), expected);
}

#[test_case("4\n1 -2 3 -4", 2 ; "mixed")]
#[test_case("3\n0 0 0", 0 ; "all zero")]
#[test_case("1\n-5", 1 ; "single negative")]
#[test_case("5\n-1 -2 -3 -4 -5", 5 ; "all negative")]
#[test_case("0", 0 ; "no readings")]
#[test_case("3\r\n-1\r\n2\r\n-3\r\n", 2 ; "crlf line endings")]
fn test_count(input: &str, expected: usize) {
    let tally = count_from(&mut Scanner::new(input.as_bytes())).unwrap();
    assert_eq!(tally.negatives, expected);
}

#[test_case("" ; "empty input")]
#[test_case("x" ; "non numeric count")]
#[test_case("-2 1 1" ; "negative count")]
#[test_case("2\n1" ; "truncated")]
#[test_case("2\n1 two" ; "non numeric reading")]
fn test_malformed(input: &str) {
    assert!(count_from(&mut Scanner::new(input.as_bytes())).is_err());
}
