//! Scalar leaf values.
//!
//! [`Atom`] is the leaf type produced by the literal reader. Its `Display`
//! writes the same notation the reader accepts, so a rendered document can be
//! read back.

use std::fmt::{self, Write as _};

/// A scalar leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Quoted string.
    Str(String),
    /// `True` / `False`.
    Bool(bool),
    /// `None`.
    None,
    /// Bare identifier, kept verbatim.
    Word(String),
}

impl Atom {
    /// Short name of the atom's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Atom::Int(_) => "int",
            Atom::Float(_) => "float",
            Atom::Str(_) => "str",
            Atom::Bool(_) => "bool",
            Atom::None => "none",
            Atom::Word(_) => "word",
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(n) => write!(f, "{n}"),
            // Debug keeps the decimal point on integral floats (`1.0`, not `1`).
            Atom::Float(x) => write!(f, "{x:?}"),
            Atom::Str(s) => write_quoted(f, s),
            Atom::Bool(true) => f.write_str("True"),
            Atom::Bool(false) => f.write_str("False"),
            Atom::None => f.write_str("None"),
            Atom::Word(w) => f.write_str(w),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom::Int(n)
    }
}

impl From<f64> for Atom {
    fn from(x: f64) -> Self {
        Atom::Float(x)
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Bool(b)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Str(s.to_owned())
    }
}
