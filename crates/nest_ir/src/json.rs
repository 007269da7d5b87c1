//! `serde_json::Value` as printer input.
//!
//! Arrays are list-like containers, scalars are leaves (formatted with
//! `serde_json`'s own `Display`, so strings keep their JSON quotes), and
//! objects are rejected as mappings.

use serde_json::Value;

use crate::kind::{ContainerKind, NodeKind};
use crate::nested::{Nested, NodeId};

impl Nested for Value {
    type Leaf = Value;

    fn node_kind(&self) -> NodeKind {
        match self {
            Value::Array(_) => NodeKind::Container(ContainerKind::List),
            Value::Object(_) => NodeKind::Unsupported("mapping"),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeKind::Leaf,
        }
    }

    fn leaf(&self) -> Option<&Value> {
        match self {
            Value::Array(_) | Value::Object(_) => None,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(self),
        }
    }

    fn with_children<R>(&self, f: impl FnOnce(&[Self]) -> R) -> R {
        match self {
            Value::Array(items) => f(items),
            _ => f(&[]),
        }
    }

    // Owned trees cannot contain themselves.
    fn identity(&self) -> Option<NodeId> {
        None
    }
}
