//! Printer configuration.

use std::ops::Range;

/// Separator placed between sibling elements.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Marker standing in for elided children.
pub const ELLIPSIS: &str = "...";

/// Child count above which a summarized container elides its middle.
pub const DEFAULT_THRESHOLD: usize = 1000;

/// Children kept at each end of a summarized container.
pub const DEFAULT_EDGE_ITEMS: usize = 3;

/// Configuration for the structural printer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PrintConfig {
    /// Emitted between siblings, never after the last one.
    /// Defaults to `", "`.
    pub separator: String,

    /// Elide the middle of long containers. Off by default, so every leaf
    /// is rendered.
    pub summary: Option<Summary>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            summary: None,
        }
    }
}

impl PrintConfig {
    /// Create a config with the specified separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }

    /// Create a config that summarizes long containers.
    pub fn summarized(summary: Summary) -> Self {
        Self {
            summary: Some(summary),
            ..Default::default()
        }
    }

    /// Replace the separator.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the summary settings.
    #[must_use]
    pub fn summary(mut self, summary: Option<Summary>) -> Self {
        self.summary = summary;
        self
    }
}

/// Elision of long containers.
///
/// A container with more than `threshold` children renders only its first
/// and last `edge_items` children, with [`ELLIPSIS`] in between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Summary {
    pub threshold: usize,
    pub edge_items: usize,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_items: DEFAULT_EDGE_ITEMS,
        }
    }
}

impl Summary {
    pub fn new(threshold: usize, edge_items: usize) -> Self {
        Self {
            threshold,
            edge_items,
        }
    }

    /// Range of child indices to elide from a container of `len` children.
    ///
    /// Returns `None` when the container is short enough to render in full,
    /// or when eliding would not hide anything.
    pub fn elided(self, len: usize) -> Option<Range<usize>> {
        if len <= self.threshold || self.edge_items.saturating_mul(2) >= len {
            return None;
        }
        Some(self.edge_items..len - self.edge_items)
    }
}
