//! Traversal state for one document.
//!
//! A document is the root passed to the printer, or a tuple met during the
//! walk, which is rendered as a document of its own. Each document owns a
//! [`Frame`] holding its dimension. The [`PathGuard`] tracking containers
//! on the active path is shared by every document of a single render, so a
//! cycle running through a tuple is still caught.

use rustc_hash::FxHashSet;

use nest_ir::NodeId;

/// Whitespace run emitted after a separator, between two siblings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HangingIndent {
    pub newlines: usize,
    pub spaces: usize,
}

/// Per-document state: the dimension measured once at the document root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    ndim: usize,
}

impl Frame {
    pub fn new(ndim: usize) -> Self {
        Frame { ndim }
    }

    #[inline]
    pub fn ndim(self) -> usize {
        self.ndim
    }

    /// Indent placed between siblings at `depth`, where the document root's
    /// children sit at depth 1.
    ///
    /// Siblings at depth `d` are separated by `ndim - d` newlines followed
    /// by `d` spaces, which lines each sibling up one column right of its
    /// parent's opening bracket. There is no indent once no newline would
    /// be emitted, or past the document's dimension.
    pub fn hanging_indent(self, depth: usize) -> Option<HangingIndent> {
        if depth == 0 || depth > self.ndim {
            return None;
        }
        let newlines = self.ndim - depth;
        if newlines == 0 {
            return None;
        }
        Some(HangingIndent {
            newlines,
            spaces: depth,
        })
    }
}

/// Containers on the path from the root to the node being visited.
#[derive(Default)]
pub struct PathGuard {
    active: FxHashSet<NodeId>,
}

impl PathGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as entered. Returns `false` if it is already on the path,
    /// meaning the structure contains itself.
    pub fn enter(&mut self, id: NodeId) -> bool {
        self.active.insert(id)
    }

    pub fn exit(&mut self, id: NodeId) {
        self.active.remove(&id);
    }
}
