use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    assert_eq!(emitter.as_str(), "");
    emitter.emit("[1");
    emitter.emit(", ");
    emitter.emit("2]");
    assert_eq!(emitter.output(), "[1, 2]");
}

#[test]
fn string_emitter_whitespace_runs() {
    let mut emitter = StringEmitter::new();
    emitter.emit("a");
    emitter.emit_newlines(2);
    emitter.emit_spaces(3);
    emitter.emit("b");
    assert_eq!(emitter.as_str(), "a\n\n   b");
}

#[test]
fn zero_length_runs_emit_nothing() {
    let mut emitter = StringEmitter::new();
    emitter.emit_newlines(0);
    emitter.emit_spaces(0);
    assert_eq!(emitter.output(), "");
}

#[test]
fn hanging_indent_is_newlines_then_spaces() {
    let mut emitter = StringEmitter::new();
    emitter.emit(", ");
    emitter.emit_hanging_indent(HangingIndent {
        newlines: 1,
        spaces: 2,
    });
    assert_eq!(emitter.output(), ", \n  ");
}
