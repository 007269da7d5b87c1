//! Leaf formatting.
//!
//! The printer never inspects leaf values itself. Every leaf is handed to a
//! [`LeafFormatter`], and a formatter failure aborts the render with the
//! formatter's own error.

use std::convert::Infallible;
use std::fmt::Display;

/// Converts leaf values to text.
pub trait LeafFormatter<L: ?Sized> {
    /// Error reported for a leaf that cannot be formatted.
    type Error;

    fn format_leaf(&mut self, leaf: &L) -> Result<String, Self::Error>;
}

/// Formats leaves with their `Display` impl.
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayLeaf;

impl<L: ?Sized + Display> LeafFormatter<L> for DisplayLeaf {
    type Error = Infallible;

    fn format_leaf(&mut self, leaf: &L) -> Result<String, Infallible> {
        Ok(leaf.to_string())
    }
}

/// Adapts an infallible closure.
#[derive(Copy, Clone, Debug)]
pub struct FnLeaf<F>(pub F);

impl<L: ?Sized, F: FnMut(&L) -> String> LeafFormatter<L> for FnLeaf<F> {
    type Error = Infallible;

    fn format_leaf(&mut self, leaf: &L) -> Result<String, Infallible> {
        Ok((self.0)(leaf))
    }
}

/// Adapts a fallible closure.
#[derive(Copy, Clone, Debug)]
pub struct TryFnLeaf<F>(pub F);

impl<L: ?Sized, E, F: FnMut(&L) -> Result<String, E>> LeafFormatter<L> for TryFnLeaf<F> {
    type Error = E;

    fn format_leaf(&mut self, leaf: &L) -> Result<String, E> {
        (self.0)(leaf)
    }
}

impl<L: ?Sized, T: LeafFormatter<L> + ?Sized> LeafFormatter<L> for &mut T {
    type Error = T::Error;

    fn format_leaf(&mut self, leaf: &L) -> Result<String, Self::Error> {
        (**self).format_leaf(leaf)
    }
}
