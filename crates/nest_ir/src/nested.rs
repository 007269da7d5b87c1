//! The traversal trait walked by the structural printer.

use crate::kind::NodeKind;

/// Identity of a container's storage.
///
/// Two nodes with the same `NodeId` share storage, so meeting the same id
/// twice on one root-to-leaf path means the structure contains itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Identity derived from the address of a container's storage.
    #[inline]
    pub fn of<T: ?Sized>(storage: *const T) -> Self {
        NodeId(storage.cast::<()>() as usize)
    }

    /// Raw address value.
    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }
}

/// A node in a nested sequence.
///
/// Implementations classify themselves with [`Nested::node_kind`] and expose
/// their children through a scoped callback, which lets interior-mutable
/// storage lend out a borrow for the duration of a visit.
///
/// # Contract
///
/// - `leaf()` returns `Some` exactly when `node_kind()` is [`NodeKind::Leaf`].
/// - `with_children` passes an empty slice for leaves and unsupported nodes.
/// - `identity()` returns `Some` for containers whose storage can be shared
///   (and therefore can form cycles). Tree-owned containers may return `None`,
///   which disables cycle tracking for that node.
pub trait Nested: Sized {
    /// Atomic value type handed to the leaf formatter.
    type Leaf: ?Sized;

    /// Classify this node.
    fn node_kind(&self) -> NodeKind;

    /// The leaf value, if this node is a leaf.
    fn leaf(&self) -> Option<&Self::Leaf>;

    /// Visit the children of this node in order.
    fn with_children<R>(&self, f: impl FnOnce(&[Self]) -> R) -> R;

    /// Storage identity used for cycle detection.
    fn identity(&self) -> Option<NodeId>;

    /// Number of direct children.
    fn child_count(&self) -> usize {
        self.with_children(<[Self]>::len)
    }
}
