use super::*;
use pretty_assertions::assert_eq;

fn read(source: &str) -> NestedValue<Atom> {
    match Parser::new(source).and_then(Parser::parse_document) {
        Ok(value) => value,
        Err(e) => panic!("failed to read {source:?}: {e}"),
    }
}

fn read_err(source: &str) -> ParseError {
    match Parser::new(source).and_then(Parser::parse_document) {
        Ok(value) => panic!("expected an error for {source:?}, got {value:?}"),
        Err(e) => e,
    }
}

fn int(n: i64) -> Atom {
    Atom::Int(n)
}

#[test]
fn flat_list() {
    assert_eq!(read("[1, 2, 3]"), NestedValue::leaves([int(1), int(2), int(3)]));
}

#[test]
fn nested_lists_and_tuples() {
    let expected = NestedValue::list([
        NestedValue::list([NestedValue::Leaf(int(1)), NestedValue::Leaf(int(2))]),
        NestedValue::tuple([NestedValue::Leaf(int(3)), NestedValue::Leaf(Atom::Str("x".into()))]),
    ]);
    assert_eq!(read("[[1, 2], (3, 'x')]"), expected);
}

#[test]
fn empty_containers() {
    assert_eq!(read("[]"), NestedValue::list(Vec::new()));
    assert_eq!(read("()"), NestedValue::tuple(Vec::new()));
    assert_eq!(
        read("[[], ()]"),
        NestedValue::list([NestedValue::list(Vec::new()), NestedValue::tuple(Vec::new())])
    );
}

#[test]
fn parenthesized_value_without_comma_is_grouping() {
    assert_eq!(read("(1)"), NestedValue::Leaf(int(1)));
    assert_eq!(read("([1])"), NestedValue::list([NestedValue::Leaf(int(1))]));
}

#[test]
fn trailing_comma_makes_single_tuple() {
    assert_eq!(read("(1,)"), NestedValue::tuple([NestedValue::Leaf(int(1))]));
}

#[test]
fn trailing_comma_allowed_in_lists() {
    assert_eq!(read("[1, 2,]"), read("[1, 2]"));
}

#[test]
fn bare_atom_document() {
    assert_eq!(read("  42 "), NestedValue::Leaf(int(42)));
    assert_eq!(read("None"), NestedValue::Leaf(Atom::None));
    assert_eq!(read("nan"), NestedValue::Leaf(Atom::Word("nan".into())));
}

#[test]
fn multiline_source() {
    assert_eq!(read("[[1, 2],\n [3, 4]]"), read("[[1, 2], [3, 4]]"));
}

#[test]
fn empty_input() {
    assert_eq!(
        read_err(""),
        ParseError::UnexpectedEnd {
            expected: "a value",
            offset: 0,
        }
    );
}

#[test]
fn unclosed_list() {
    assert_eq!(
        read_err("[1, 2"),
        ParseError::UnexpectedEnd {
            expected: "`,` or `]`",
            offset: 5,
        }
    );
}

#[test]
fn mismatched_closer() {
    assert_eq!(
        read_err("[1, 2)"),
        ParseError::UnexpectedToken {
            expected: "`,` or `]`",
            found: ")".into(),
            span: 5..6,
        }
    );
}

#[test]
fn missing_comma_in_tuple() {
    assert_eq!(
        read_err("(1 2)"),
        ParseError::UnexpectedToken {
            expected: "`,` or `)`",
            found: "2".into(),
            span: 3..4,
        }
    );
}

#[test]
fn leading_comma() {
    assert_eq!(
        read_err("[, 1]"),
        ParseError::UnexpectedToken {
            expected: "a value",
            found: ",".into(),
            span: 1..2,
        }
    );
}

#[test]
fn mappings_are_rejected() {
    assert_eq!(
        read_err("[1, {'a': 2}]"),
        ParseError::MappingUnsupported { span: 4..5 }
    );
}

#[test]
fn trailing_input() {
    let err = read_err("[1] [2]");
    assert_eq!(err, ParseError::TrailingInput { span: 4..5 });
    assert_eq!(err.span(), 4..5);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 50_000;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = read(&source);

    let mut levels = 1;
    while let Some(child) = value.seq().and_then(|s| s.with_items(|items| items.first().cloned())) {
        value = child;
        levels += 1;
    }
    assert_eq!(levels, depth);
}
