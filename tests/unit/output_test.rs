//! Tests for the Output module
//!
//! Output renders a tally either as the bare count or as a JSON object.

use cold::Tally;
use cold::output::{CountResult, OutputMode};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn human_line_is_bare_count() {
    let result = CountResult {
        readings: 4,
        negatives: 2,
    };
    assert_eq!(result.to_line(OutputMode::Human), "2");
}

#[test]
fn json_line_has_both_fields() {
    let result = CountResult::from(Tally {
        readings: 5,
        negatives: 5,
    });
    let line = result.to_line(OutputMode::Json);
    assert!(!line.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["readings"], 5);
    assert_eq!(value["negatives"], 5);
}
