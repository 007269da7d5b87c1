//! Output sink for rendered documents.

use crate::context::HangingIndent;

/// Receives rendered fragments in order.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit `count` newlines.
    fn emit_newlines(&mut self, count: usize);

    /// Emit `count` spaces.
    fn emit_spaces(&mut self, count: usize);

    /// Emit the whitespace run placed between two siblings.
    fn emit_hanging_indent(&mut self, indent: HangingIndent) {
        self.emit_newlines(indent.newlines);
        self.emit_spaces(indent.spaces);
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newlines(&mut self, count: usize) {
        for _ in 0..count {
            self.buffer.push('\n');
        }
    }

    fn emit_spaces(&mut self, count: usize) {
        for _ in 0..count {
            self.buffer.push(' ');
        }
    }
}

#[cfg(test)]
mod tests;
