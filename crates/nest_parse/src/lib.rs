//! Literal Notation Reader
//!
//! Reads documents such as `[[1, 2], (3, 'x'), []]` into
//! [`NestedValue<Atom>`](nest_ir::NestedValue). Square brackets build lists,
//! parentheses build tuples (Python rules: `(x)` is grouping, `(x,)` is a
//! tuple), and scalars become [`Atom`](nest_ir::Atom) leaves.
//!
//! # Example
//!
//! ```
//! use nest_parse::parse;
//!
//! let value = parse("[1, (2, 3), 'four']").unwrap();
//! assert_eq!(value.seq().map(|s| s.len()), Some(3));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Span};
pub use parser::Parser;

use nest_ir::{Atom, NestedValue};

/// Read one literal document.
pub fn parse(source: &str) -> Result<NestedValue<Atom>, ParseError> {
    Parser::new(source)?.parse_document()
}
