//! Printer errors.

use std::convert::Infallible;
use std::fmt;
use std::io;

use smallvec::SmallVec;

/// Child indices leading from the root to a node.
///
/// Displayed as `root`, `root[0]`, `root[0][2]` and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[usize; 8]>);

impl NodePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// Number of steps below the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(indices: [usize; N]) -> Self {
        NodePath(indices.into_iter().collect())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for index in &self.0 {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Why a node was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// The node is neither a leaf nor a list-like or tuple-like container.
    #[error("unsupported {0} value")]
    Unsupported(&'static str),

    /// The container is already open on the path leading to it.
    #[error("container contains itself")]
    Cycle,
}

/// Input that is not a printable nested sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed input at {path}: {reason}")]
pub struct MalformedInput {
    pub path: NodePath,
    pub reason: MalformedReason,
}

impl MalformedInput {
    pub fn new(path: NodePath, reason: MalformedReason) -> Self {
        MalformedInput { path, reason }
    }

    pub fn is_cycle(&self) -> bool {
        self.reason == MalformedReason::Cycle
    }
}

/// Error from printing a nested sequence.
///
/// `E` is the leaf formatter's error type. Formatters that cannot fail use
/// [`Infallible`].
#[derive(Debug)]
pub enum PrintError<E = Infallible> {
    /// The input is not a leaf, list or tuple, or contains itself.
    MalformedInput(MalformedInput),
    /// The leaf formatter failed. Carries its error unchanged.
    Formatter(E),
    /// Writing the rendered output failed.
    Io(io::Error),
}

impl<E> PrintError<E> {
    /// The formatter error, if this is one.
    pub fn into_formatter_error(self) -> Option<E> {
        match self {
            PrintError::Formatter(e) => Some(e),
            PrintError::MalformedInput(_) | PrintError::Io(_) => None,
        }
    }

    /// The rejected input, if this is a malformed input error.
    pub fn malformed(&self) -> Option<&MalformedInput> {
        match self {
            PrintError::MalformedInput(e) => Some(e),
            PrintError::Formatter(_) | PrintError::Io(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for PrintError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::MalformedInput(e) => write!(f, "{e}"),
            PrintError::Formatter(e) => write!(f, "{e}"),
            PrintError::Io(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for PrintError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrintError::MalformedInput(_) => None,
            PrintError::Formatter(e) => e.source(),
            PrintError::Io(e) => Some(e),
        }
    }
}

impl<E> From<MalformedInput> for PrintError<E> {
    fn from(e: MalformedInput) -> Self {
        PrintError::MalformedInput(e)
    }
}

impl<E> From<io::Error> for PrintError<E> {
    fn from(e: io::Error) -> Self {
        PrintError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn path_display() {
        assert_eq!(NodePath::root().to_string(), "root");
        assert_eq!(NodePath::from([0, 2]).to_string(), "root[0][2]");
    }

    #[test]
    fn path_push_pop() {
        let mut path = NodePath::root();
        assert!(path.is_root());
        path.push(3);
        path.push(1);
        assert_eq!(path.indices(), &[3, 1]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.pop(), Some(1));
        assert_eq!(path, NodePath::from([3]));
    }

    #[test]
    fn malformed_message_names_path_and_reason() {
        let cycle = MalformedInput::new(NodePath::from([0]), MalformedReason::Cycle);
        assert!(cycle.is_cycle());
        assert_eq!(
            cycle.to_string(),
            "malformed input at root[0]: container contains itself"
        );

        let mapping = MalformedInput::new(NodePath::root(), MalformedReason::Unsupported("mapping"));
        assert!(!mapping.is_cycle());
        assert_eq!(
            mapping.to_string(),
            "malformed input at root: unsupported mapping value"
        );
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("no format for {0}")]
    struct NoFormat(i64);

    #[test]
    fn formatter_error_is_passed_through() {
        let err: PrintError<NoFormat> = PrintError::Formatter(NoFormat(7));
        assert_eq!(err.to_string(), "no format for 7");
        assert!(err.source().is_none());
        assert!(err.malformed().is_none());
        assert_eq!(err.into_formatter_error(), Some(NoFormat(7)));
    }

    #[test]
    fn malformed_input_converts() {
        let malformed = MalformedInput::new(NodePath::from([1]), MalformedReason::Cycle);
        let err: PrintError<NoFormat> = malformed.clone().into();
        assert_eq!(err.malformed(), Some(&malformed));
        assert_eq!(err.into_formatter_error(), None);
    }

    #[test]
    fn io_error_has_source() {
        let err: PrintError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "failed to write output: closed");
        assert!(err.source().is_some());
    }
}
