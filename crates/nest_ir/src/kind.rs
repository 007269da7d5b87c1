//! Node classification.
//!
//! Every node the printer visits is classified into exactly one of three
//! shapes: a leaf, a list-like container, or a tuple-like container. Anything
//! else is reported as [`NodeKind::Unsupported`] and rejected by the printer.

use std::fmt;

/// Container flavor, which decides the delimiters and whether the container
/// extends the dimension count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Square brackets. Counts toward the dimension of its document.
    List,
    /// Round brackets. Rendered as an independent sub-document.
    Tuple,
}

impl ContainerKind {
    /// Opening delimiter.
    #[inline]
    pub fn open(self) -> &'static str {
        match self {
            ContainerKind::List => "[",
            ContainerKind::Tuple => "(",
        }
    }

    /// Closing delimiter.
    #[inline]
    pub fn close(self) -> &'static str {
        match self {
            ContainerKind::List => "]",
            ContainerKind::Tuple => ")",
        }
    }

    /// Check if this container extends the dimension count.
    #[inline]
    pub fn is_list(self) -> bool {
        matches!(self, ContainerKind::List)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => f.write_str("list"),
            ContainerKind::Tuple => f.write_str("tuple"),
        }
    }
}

/// Shape of a single node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Atomic value, rendered through the leaf formatter.
    Leaf,
    /// Ordered container of child nodes.
    Container(ContainerKind),
    /// A value the printer refuses to coerce (e.g. `"mapping"`).
    Unsupported(&'static str),
}

impl NodeKind {
    /// Get the container kind, if this node is a container.
    #[inline]
    pub fn container(self) -> Option<ContainerKind> {
        match self {
            NodeKind::Container(kind) => Some(kind),
            NodeKind::Leaf | NodeKind::Unsupported(_) => None,
        }
    }

    /// Check if this node is a list-like container.
    #[inline]
    pub fn is_list(self) -> bool {
        matches!(self, NodeKind::Container(ContainerKind::List))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn delimiters_match_kind() {
        assert_eq!(ContainerKind::List.open(), "[");
        assert_eq!(ContainerKind::List.close(), "]");
        assert_eq!(ContainerKind::Tuple.open(), "(");
        assert_eq!(ContainerKind::Tuple.close(), ")");
    }

    #[test]
    fn only_lists_extend_dimension() {
        assert!(ContainerKind::List.is_list());
        assert!(!ContainerKind::Tuple.is_list());
        assert!(NodeKind::Container(ContainerKind::List).is_list());
        assert!(!NodeKind::Container(ContainerKind::Tuple).is_list());
        assert!(!NodeKind::Leaf.is_list());
    }

    #[test]
    fn container_accessor() {
        assert_eq!(
            NodeKind::Container(ContainerKind::Tuple).container(),
            Some(ContainerKind::Tuple)
        );
        assert_eq!(NodeKind::Leaf.container(), None);
        assert_eq!(NodeKind::Unsupported("mapping").container(), None);
    }
}
