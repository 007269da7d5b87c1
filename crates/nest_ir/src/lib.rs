//! Nested-sequence data model.
//!
//! The structural printer in `nest_fmt` walks any value implementing
//! [`Nested`]. This crate defines that trait, the closed set of node shapes
//! it can report, and [`NestedValue`], the ready-made shared representation
//! used by the literal reader and the CLI.
//!
//! # Modules
//!
//! - [`kind`]: Node and container classification
//! - [`nested`]: The traversal trait and node identity
//! - [`value`]: `NestedValue` and its shared `Seq` storage
//! - [`atom`]: Scalar leaf values produced by the literal reader
//! - [`stack`]: Stack growth for deep recursion
//! - `json`: `serde_json::Value` adapter (feature `json`)

pub mod atom;
pub mod kind;
mod macros;
pub mod nested;
pub mod stack;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use atom::Atom;
pub use kind::{ContainerKind, NodeKind};
pub use nested::{Nested, NodeId};
pub use stack::ensure_sufficient_stack;
pub use value::{NestedValue, Seq};
