//! Structural printer.
//!
//! # Algorithm
//!
//! 1. Measure the document's dimension once, following list-like children
//!    only (see [`crate::dimension`]).
//! 2. Walk the document depth-first, emitting delimiters, leaves and
//!    separators.
//! 3. After a container child, hold a hanging indent for the next sibling.
//!    It is emitted after the separator if another sibling follows, and
//!    dropped if the parent closes first, so no whitespace ever precedes a
//!    closing bracket.
//!
//! A tuple child restarts at step 1 as a document of its own. It shares the
//! parent's path and cycle guard but none of its indent state.


use std::io::{self, Write};
use std::marker::PhantomData;

use nest_ir::{ensure_sufficient_stack, ContainerKind, Nested, NodeKind};

use crate::config::{PrintConfig, ELLIPSIS};
use crate::context::{Frame, HangingIndent, PathGuard};
use crate::dimension::DimensionCalculator;
use crate::emitter::{Emitter, StringEmitter};
use crate::error::{MalformedInput, MalformedReason, NodePath, PrintError};
use crate::leaf::{DisplayLeaf, LeafFormatter};

/// Renders nested sequences with a leaf formatter and a [`PrintConfig`].
///
/// Every call renders from scratch. Nothing carries over between calls
/// except the formatter itself.
pub struct StructuralPrinter<F = DisplayLeaf> {
    formatter: F,
    config: PrintConfig,
}

impl Default for StructuralPrinter<DisplayLeaf> {
    fn default() -> Self {
        Self::new(DisplayLeaf)
    }
}

impl<F> StructuralPrinter<F> {
    /// Create a printer with the default config.
    pub fn new(formatter: F) -> Self {
        Self::with_config(formatter, PrintConfig::default())
    }

    /// Create a printer with a custom config.
    pub fn with_config(formatter: F, config: PrintConfig) -> Self {
        StructuralPrinter { formatter, config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Render `root` to a string.
    pub fn render<T>(&mut self, root: &T) -> Result<String, PrintError<F::Error>>
    where
        T: Nested,
        F: LeafFormatter<T::Leaf>,
    {
        let mut out = StringEmitter::new();
        self.render_into(root, &mut out)?;
        Ok(out.output())
    }

    /// Render `root` into an emitter.
    ///
    /// On error the emitter holds whatever was rendered before the failure.
    /// Use [`render`](Self::render) when output must be all or nothing.
    pub fn render_into<T, M>(&mut self, root: &T, out: &mut M) -> Result<(), PrintError<F::Error>>
    where
        T: Nested,
        F: LeafFormatter<T::Leaf>,
        M: Emitter,
    {
        Render {
            config: &self.config,
            formatter: &mut self.formatter,
            out,
            guard: PathGuard::new(),
            path: NodePath::root(),
            node: PhantomData,
        }
        .document(root)
    }

    /// Render `root`, then write it to `out` followed by a newline.
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn print_to<T, W>(&mut self, root: &T, mut out: W) -> Result<(), PrintError<F::Error>>
    where
        T: Nested,
        F: LeafFormatter<T::Leaf>,
        W: Write,
    {
        let text = self.render(root)?;
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

/// State of one render call.
struct Render<'a, T, F, M> {
    config: &'a PrintConfig,
    formatter: &'a mut F,
    out: &'a mut M,
    guard: PathGuard,
    path: NodePath,
    node: PhantomData<fn(&T)>,
}

impl<T, F, M> Render<'_, T, F, M>
where
    T: Nested,
    F: LeafFormatter<T::Leaf>,
    M: Emitter,
{
    /// Render `node` as a document with its own dimension.
    fn document(&mut self, node: &T) -> Result<(), PrintError<F::Error>> {
        match node.node_kind() {
            NodeKind::Leaf => self.leaf(node),
            NodeKind::Container(kind) => {
                let ndim = DimensionCalculator::at(self.path.clone()).measure(node)?;
                tracing::debug!(path = %self.path, %kind, ndim, "rendering document");
                self.container(node, kind, Frame::new(ndim), 0)
            }
            NodeKind::Unsupported(shape) => Err(self.reject(MalformedReason::Unsupported(shape))),
        }
    }

    /// Render a container at `depth` within the current document.
    fn container(
        &mut self,
        node: &T,
        kind: ContainerKind,
        frame: Frame,
        depth: usize,
    ) -> Result<(), PrintError<F::Error>> {
        ensure_sufficient_stack(|| {
            let id = node.identity();
            if let Some(id) = id {
                if !self.guard.enter(id) {
                    return Err(self.reject(MalformedReason::Cycle));
                }
            }

            self.out.emit(kind.open());
            node.with_children(|children| self.children(children, frame, depth + 1))?;
            self.out.emit(kind.close());

            if let Some(id) = id {
                self.guard.exit(id);
            }
            Ok(())
        })
    }

    /// Render the children of one container, which sit at `depth`.
    fn children(&mut self, children: &[T], frame: Frame, depth: usize) -> Result<(), PrintError<F::Error>> {
        let elided = self.config.summary.and_then(|summary| summary.elided(children.len()));
        let mut pending: Option<HangingIndent> = None;

        let mut index = 0;
        while index < children.len() {
            if index > 0 {
                self.out.emit(&self.config.separator);
                if let Some(indent) = pending {
                    self.out.emit_hanging_indent(indent);
                }
            }

            if let Some(skipped) = elided.as_ref().filter(|skipped| skipped.start == index) {
                // The marker stands in for its siblings and keeps their indent.
                self.out.emit(ELLIPSIS);
                index = skipped.end;
                continue;
            }

            self.path.push(index);
            pending = self.child(&children[index], frame, depth)?;
            self.path.pop();
            index += 1;
        }

        if pending.is_some() {
            tracing::trace!(path = %self.path, depth, "retracting hanging indent at close");
        }
        Ok(())
    }

    /// Render one child. Returns the indent owed to the next sibling.
    fn child(&mut self, child: &T, frame: Frame, depth: usize) -> Result<Option<HangingIndent>, PrintError<F::Error>> {
        match child.node_kind() {
            NodeKind::Leaf => {
                self.leaf(child)?;
                Ok(None)
            }
            NodeKind::Container(ContainerKind::List) => {
                self.container(child, ContainerKind::List, frame, depth)?;
                Ok(frame.hanging_indent(depth))
            }
            NodeKind::Container(ContainerKind::Tuple) => {
                self.document(child)?;
                Ok(frame.hanging_indent(depth))
            }
            NodeKind::Unsupported(shape) => Err(self.reject(MalformedReason::Unsupported(shape))),
        }
    }

    fn leaf(&mut self, node: &T) -> Result<(), PrintError<F::Error>> {
        let Some(value) = node.leaf() else {
            return Err(self.reject(MalformedReason::Unsupported("valueless leaf")));
        };
        match self.formatter.format_leaf(value) {
            Ok(text) => {
                self.out.emit(&text);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(path = %self.path, "leaf formatter failed");
                Err(PrintError::Formatter(e))
            }
        }
    }

    fn reject(&self, reason: MalformedReason) -> PrintError<F::Error> {
        tracing::debug!(path = %self.path, %reason, "rejecting malformed input");
        MalformedInput::new(self.path.clone(), reason).into()
    }
}

/// Render `root` with the default formatter and config, then write it to
/// `out` followed by a newline.
pub fn pprint_to<T, W>(root: &T, out: W) -> Result<(), PrintError>
where
    T: Nested,
    T::Leaf: std::fmt::Display,
    W: Write,
{
    StructuralPrinter::default().print_to(root, out)
}

/// Render `root` with the default formatter and config to stdout.
pub fn pprint<T>(root: &T) -> Result<(), PrintError>
where
    T: Nested,
    T::Leaf: std::fmt::Display,
{
    pprint_to(root, io::stdout().lock())
}
