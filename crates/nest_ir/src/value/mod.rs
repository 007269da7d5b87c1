//! Shared nested values.
//!
//! [`NestedValue`] is the printer's native input. Containers hold a [`Seq`],
//! a reference-counted, interior-mutable vector. Cloning a value shares the
//! storage, the same way nested lists alias each other in dynamic languages,
//! which is what makes self-containing structures expressible at all.
//!
//! A `Seq` that (transitively) contains itself is a reference cycle and is
//! never freed on its own; call [`Seq::clear`] to break it.

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::kind::{ContainerKind, NodeKind};
use crate::nested::{Nested, NodeId};

/// Shared storage for the children of a container.
pub struct Seq<L> {
    items: Rc<RefCell<Vec<NestedValue<L>>>>,
}

impl<L> Seq<L> {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Wrap an existing vector of children.
    pub fn from_vec(items: Vec<NestedValue<L>>) -> Self {
        Seq {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Append a child.
    ///
    /// Pushing a clone of a container into its own storage (directly or via
    /// another container) builds a cycle.
    pub fn push(&self, value: NestedValue<L>) {
        self.items.borrow_mut().push(value);
    }

    /// Remove all children. Breaks any cycle running through this storage.
    pub fn clear(&self) {
        // Take the children out first so their drops run without the borrow held.
        let old = std::mem::take(&mut *self.items.borrow_mut());
        drop(old);
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Check if there are no children.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Run `f` with the children borrowed.
    pub fn with_items<R>(&self, f: impl FnOnce(&[NestedValue<L>]) -> R) -> R {
        f(&self.items.borrow())
    }

    /// Storage identity.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.items))
    }

    /// Check if two handles share storage.
    pub fn ptr_eq(&self, other: &Seq<L>) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<L> Clone for Seq<L> {
    fn clone(&self) -> Self {
        Seq {
            items: Rc::clone(&self.items),
        }
    }
}

impl<L> Drop for Seq<L> {
    // Unwinds uniquely owned descendants with an explicit stack so that
    // dropping a very deep chain does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_if_unique(&self.items, &mut pending);

        while let Some(value) = pending.pop() {
            if let Some(seq) = value.seq() {
                take_if_unique(&seq.items, &mut pending);
            }
        }
    }
}

fn take_if_unique<L>(items: &Rc<RefCell<Vec<NestedValue<L>>>>, into: &mut Vec<NestedValue<L>>) {
    if Rc::strong_count(items) != 1 {
        return;
    }
    if let Ok(mut children) = items.try_borrow_mut() {
        into.append(&mut *children);
    }
}

impl<L> Default for Seq<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for Seq<L> {
    // Never walks the children: the storage may contain itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("id", &format_args!("{:#x}", self.id().raw()))
            .field("len", &self.len())
            .finish()
    }
}

impl<L> FromIterator<NestedValue<L>> for Seq<L> {
    fn from_iter<I: IntoIterator<Item = NestedValue<L>>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// A leaf or a container of nested values.
#[derive(Clone, Debug)]
pub enum NestedValue<L> {
    /// Atomic value.
    Leaf(L),
    /// List-like container, rendered with `[` `]`.
    List(Seq<L>),
    /// Tuple-like container, rendered with `(` `)`.
    Tuple(Seq<L>),
}

impl<L> NestedValue<L> {
    /// Wrap a leaf value.
    pub fn leaf(value: L) -> Self {
        NestedValue::Leaf(value)
    }

    /// Build a list-like container.
    pub fn list(items: impl IntoIterator<Item = NestedValue<L>>) -> Self {
        NestedValue::List(items.into_iter().collect())
    }

    /// Build a tuple-like container.
    pub fn tuple(items: impl IntoIterator<Item = NestedValue<L>>) -> Self {
        NestedValue::Tuple(items.into_iter().collect())
    }

    /// Build a list of leaves.
    pub fn leaves(values: impl IntoIterator<Item = L>) -> Self {
        Self::list(values.into_iter().map(NestedValue::Leaf))
    }

    /// Container kind, or `None` for leaves.
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            NestedValue::Leaf(_) => None,
            NestedValue::List(_) => Some(ContainerKind::List),
            NestedValue::Tuple(_) => Some(ContainerKind::Tuple),
        }
    }

    /// Container storage, or `None` for leaves.
    pub fn seq(&self) -> Option<&Seq<L>> {
        match self {
            NestedValue::Leaf(_) => None,
            NestedValue::List(seq) | NestedValue::Tuple(seq) => Some(seq),
        }
    }

    /// Leaf value, or `None` for containers.
    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            NestedValue::Leaf(value) => Some(value),
            NestedValue::List(_) | NestedValue::Tuple(_) => None,
        }
    }
}

impl<L> Nested for NestedValue<L> {
    type Leaf = L;

    fn node_kind(&self) -> NodeKind {
        match self.container_kind() {
            Some(kind) => NodeKind::Container(kind),
            None => NodeKind::Leaf,
        }
    }

    fn leaf(&self) -> Option<&L> {
        self.as_leaf()
    }

    fn with_children<R>(&self, f: impl FnOnce(&[Self]) -> R) -> R {
        match self.seq() {
            Some(seq) => seq.with_items(f),
            None => f(&[]),
        }
    }

    fn identity(&self) -> Option<NodeId> {
        self.seq().map(Seq::id)
    }
}

/// Structural equality.
///
/// Containers sharing storage compare equal without being walked. Two
/// distinct cyclic structures are still walked and must not be compared.
impl<L: PartialEq> PartialEq for NestedValue<L> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NestedValue::Leaf(a), NestedValue::Leaf(b)) => a == b,
            (NestedValue::List(a), NestedValue::List(b))
            | (NestedValue::Tuple(a), NestedValue::Tuple(b)) => {
                a.ptr_eq(b) || a.with_items(|xs| b.with_items(|ys| xs == ys))
            }
            _ => false,
        }
    }
}
