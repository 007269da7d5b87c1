//! Errors from reading literal notation.

use std::ops::Range;

/// Byte range in the source text.
pub type Span = Range<usize>;

/// Error from reading a literal document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Bytes that do not form any token.
    #[error("invalid token `{text}` at byte {}", .span.start)]
    InvalidToken { text: String, span: Span },

    /// A token that cannot appear here.
    #[error("expected {expected}, found `{found}` at byte {}", .span.start)]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// The source ended inside a document.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str, offset: usize },

    /// A `{` opened a mapping; only sequences can be printed.
    #[error("mappings are not supported (at byte {})", .span.start)]
    MappingUnsupported { span: Span },

    /// More tokens followed a complete document.
    #[error("unexpected input after the document at byte {}", .span.start)]
    TrailingInput { span: Span },
}

impl ParseError {
    /// Source range the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::MappingUnsupported { span }
            | ParseError::TrailingInput { span } => span.clone(),
            ParseError::UnexpectedEnd { offset, .. } => *offset..*offset,
        }
    }
}
