//! Dimension measurement.
//!
//! The dimension of a container is one more than the largest dimension among
//! its list-like children. Tuples and leaves contribute nothing: a tuple is
//! rendered as a document of its own and measured when it is reached. A
//! leaf has dimension 0.
//!
//! The walk follows only list-like children, so it is rejected only by
//! cycles made entirely of lists. Cycles through a tuple are caught by the
//! render pass.

#[cfg(test)]
mod tests;

use nest_ir::{ensure_sufficient_stack, Nested, NodeKind};

use crate::context::PathGuard;
use crate::error::{MalformedInput, MalformedReason, NodePath};

/// Measures the dimension of one document.
pub struct DimensionCalculator {
    guard: PathGuard,
    path: NodePath,
}

impl DimensionCalculator {
    /// Measure a document found at the root.
    pub fn new() -> Self {
        Self::at(NodePath::root())
    }

    /// Measure a document found at `path`, which prefixes reported errors.
    pub fn at(path: NodePath) -> Self {
        DimensionCalculator {
            guard: PathGuard::new(),
            path,
        }
    }

    /// Dimension of `node`.
    pub fn measure<T: Nested>(&mut self, node: &T) -> Result<usize, MalformedInput> {
        match node.node_kind() {
            NodeKind::Leaf => Ok(0),
            NodeKind::Container(_) => self.container(node),
            NodeKind::Unsupported(shape) => Err(self.reject(MalformedReason::Unsupported(shape))),
        }
    }

    fn container<T: Nested>(&mut self, node: &T) -> Result<usize, MalformedInput> {
        ensure_sufficient_stack(|| {
            let id = node.identity();
            if let Some(id) = id {
                if !self.guard.enter(id) {
                    return Err(self.reject(MalformedReason::Cycle));
                }
            }

            let deepest = node.with_children(|children| self.deepest_list(children))?;

            if let Some(id) = id {
                self.guard.exit(id);
            }
            Ok(deepest + 1)
        })
    }

    fn deepest_list<T: Nested>(&mut self, children: &[T]) -> Result<usize, MalformedInput> {
        let mut deepest = 0;
        for (index, child) in children.iter().enumerate() {
            self.path.push(index);
            let dim = match child.node_kind() {
                NodeKind::Container(kind) if kind.is_list() => self.container(child)?,
                NodeKind::Leaf | NodeKind::Container(_) => 0,
                NodeKind::Unsupported(shape) => {
                    return Err(self.reject(MalformedReason::Unsupported(shape)));
                }
            };
            self.path.pop();
            deepest = deepest.max(dim);
        }
        Ok(deepest)
    }

    fn reject(&self, reason: MalformedReason) -> MalformedInput {
        tracing::debug!(path = %self.path, %reason, "rejecting input while measuring dimension");
        MalformedInput::new(self.path.clone(), reason)
    }
}

impl Default for DimensionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Dimension of a nested sequence.
///
/// ```
/// use nest_ir::nested;
///
/// assert_eq!(nest_fmt::ndim(&nested![1]), Ok(0));
/// assert_eq!(nest_fmt::ndim(&nested![[[1, 2], [3, 4]]]), Ok(2));
/// assert_eq!(nest_fmt::ndim(&nested![[[1, (2, [3])], [[4]]]]), Ok(3));
/// ```
pub fn ndim<T: Nested>(root: &T) -> Result<usize, MalformedInput> {
    DimensionCalculator::new().measure(root)
}
