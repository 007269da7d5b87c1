//! Structural printer for nested sequences.
//!
//! Renders arbitrarily nested, possibly ragged sequences of list-like and
//! tuple-like containers as bracketed text, with the hanging indents used by
//! array-printing libraries:
//!
//! ```
//! use nest_ir::nested;
//!
//! let value = nested![[[1, 2], [3, 4]]];
//! assert_eq!(nest_fmt::to_string(&value).ok().as_deref(), Some("[[1, 2], \n [3, 4]]"));
//! ```
//!
//! # Architecture
//!
//! Rendering is a two-pass walk per document:
//!
//! 1. **Measure**: the dimension of the document, following list-like
//!    children only
//! 2. **Render**: depth-first emission, with a hanging indent between
//!    siblings whose size depends on the dimension and the depth
//!
//! Tuples are documents of their own. Containers that contain themselves are
//! rejected, never looped over.
//!
//! # Modules
//!
//! - [`config`]: Separator and summarization settings
//! - [`context`]: Per-document frame, hanging indents, cycle guard
//! - [`dimension`]: Dimension measurement
//! - [`emitter`]: Output abstraction
//! - [`error`]: Malformed input and print errors
//! - [`leaf`]: Leaf formatter trait and adapters
//! - [`printer`]: The render engine

pub mod config;
pub mod context;
pub mod dimension;
pub mod emitter;
pub mod error;
pub mod leaf;
pub mod printer;

use std::fmt::Display;

use nest_ir::Nested;

pub use config::{PrintConfig, Summary, DEFAULT_SEPARATOR, ELLIPSIS};
pub use context::{Frame, HangingIndent};
pub use dimension::{ndim, DimensionCalculator};
pub use emitter::{Emitter, StringEmitter};
pub use error::{MalformedInput, MalformedReason, NodePath, PrintError};
pub use leaf::{DisplayLeaf, FnLeaf, LeafFormatter, TryFnLeaf};
pub use printer::{pprint, pprint_to, StructuralPrinter};

/// Render `root`, formatting leaves with `Display`.
pub fn to_string<T>(root: &T) -> Result<String, PrintError>
where
    T: Nested,
    T::Leaf: Display,
{
    StructuralPrinter::default().render(root)
}

/// Render `root` with a custom separator and summarization.
pub fn to_string_with_config<T>(root: &T, config: PrintConfig) -> Result<String, PrintError>
where
    T: Nested,
    T::Leaf: Display,
{
    StructuralPrinter::with_config(DisplayLeaf, config).render(root)
}

/// Render `root`, formatting leaves with `format_leaf`.
///
/// ```
/// use nest_ir::nested;
///
/// let value = nested![[1.5, (2.0, 3.17)]];
/// let text = nest_fmt::to_string_with(&value, |x: &f64| format!("{x:.1}"));
/// assert_eq!(text.ok().as_deref(), Some("[1.5, (2.0, 3.2)]"));
/// ```
pub fn to_string_with<T, F>(root: &T, format_leaf: F) -> Result<String, PrintError>
where
    T: Nested,
    F: FnMut(&T::Leaf) -> String,
{
    StructuralPrinter::new(FnLeaf(format_leaf)).render(root)
}

/// Render `root` with a fallible leaf formatter.
///
/// The first formatter error aborts the render and is returned unchanged
/// as [`PrintError::Formatter`].
pub fn try_to_string_with<T, F, E>(root: &T, format_leaf: F) -> Result<String, PrintError<E>>
where
    T: Nested,
    F: FnMut(&T::Leaf) -> Result<String, E>,
{
    StructuralPrinter::new(TryFnLeaf(format_leaf)).render(root)
}
