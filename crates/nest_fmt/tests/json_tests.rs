//! Printing `serde_json` documents.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use nest_fmt::{ndim, pprint_to, to_string, MalformedReason, NodePath, PrintError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn arrays_render_as_lists() {
    let value = json!([[1, 2.5], [true, null]]);
    assert_eq!(to_string(&value).unwrap(), "[[1, 2.5], \n [true, null]]");
}

#[test]
fn strings_keep_json_quotes() {
    let value = json!(["a", ["b c"]]);
    assert_eq!(to_string(&value).unwrap(), "[\"a\", [\"b c\"]]");
}

#[test]
fn scalar_document() {
    assert_eq!(to_string(&json!(7)).unwrap(), "7");
    assert_eq!(ndim(&json!("x")).unwrap(), 0);
}

#[test]
fn dimension_of_ragged_arrays() {
    assert_eq!(ndim(&json!([1, [2, [3]], []])).unwrap(), 3);
}

#[test]
fn objects_are_rejected_as_mappings() {
    let err = to_string(&json!([[1], [2, {"k": 3}]])).unwrap_err();
    let malformed = err.malformed().unwrap();
    assert_eq!(malformed.path, NodePath::from([1, 1]));
    assert_eq!(malformed.reason, MalformedReason::Unsupported("mapping"));
}

#[test]
fn object_root_is_rejected() {
    let err = to_string(&json!({"k": [1]})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed input at root: unsupported mapping value"
    );
}

#[test]
fn pprint_to_writes_a_line() {
    let mut out = Vec::new();
    pprint_to(&json!([[1], [2]]), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[[1], \n [2]]\n");
}

#[test]
fn pprint_to_leaves_sink_untouched_on_error() {
    let mut out = Vec::new();
    let result = pprint_to(&json!([{"k": 1}]), &mut out);
    assert!(matches!(result, Err(PrintError::MalformedInput(_))));
    assert!(out.is_empty());
}
