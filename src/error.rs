use thiserror::Error;

pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Errors raised for arguments that do not fit the document they describe.
///
/// Malformed markup never produces one of these; it becomes an invalid node instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Offset {offset} is outside the document (length {length})")]
    OffsetOutOfRange { offset: usize, length: usize },
    #[error("Position {line}:{column} is outside the document")]
    PositionOutOfRange { line: usize, column: usize },
    #[error("Span {start}..{end} ends before it starts")]
    InvertedSpan { start: usize, end: usize },
    #[error("Span {start}..{end} does not fit in a document of length {length}")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        length: usize,
    },
}

/// Failure to parse an expression.
///
/// Callers usually fall back to treating the text as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected} at offset {offset}")]
pub struct ExpressionError {
    pub offset: usize,
    pub expected: &'static str,
}
