//! Line/column positions and the offset lookup

use std::fmt;

use ropey::Rope;

use crate::error::{ModelError, Result};
use crate::syntax::TextSpan;

/// A 0-based line and 0-based column (in characters).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range between two positions, `start <= end`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range {start}..{end} ends before it starts");
        Self { start, end }
    }

    /// Does this range fully enclose `other`?
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Is `position` within this range (both ends inclusive)?
    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Converts byte offsets in a document to positions and back.
#[derive(Debug, Clone)]
pub struct TextPositions {
    rope: Rope,
}

impl TextPositions {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Length of the document in bytes.
    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Position of the byte `offset`; valid for `0..=len()`.
    pub fn position(&self, offset: usize) -> Result<Position> {
        if offset > self.len() {
            return Err(ModelError::OffsetOutOfRange {
                offset,
                length: self.len(),
            });
        }

        let line = self.rope.byte_to_line(offset);
        let column = self.rope.byte_to_char(offset) - self.rope.line_to_char(line);
        Ok(Position::new(line, column))
    }

    /// Byte offset of `position`.
    pub fn offset(&self, position: Position) -> Result<usize> {
        let out_of_range = ModelError::PositionOutOfRange {
            line: position.line,
            column: position.column,
        };

        if position.line >= self.rope.len_lines() {
            return Err(out_of_range);
        }
        if position.column > self.rope.line(position.line).len_chars() {
            return Err(out_of_range);
        }

        let char_index = self.rope.line_to_char(position.line) + position.column;
        Ok(self.rope.char_to_byte(char_index))
    }

    /// Range covered by `span`.
    pub fn range(&self, span: TextSpan) -> Result<Range> {
        if span.start > span.end {
            return Err(ModelError::InvertedSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.len() {
            return Err(ModelError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                length: self.len(),
            });
        }

        Ok(Range::new(self.position(span.start)?, self.position(span.end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let positions = TextPositions::new("<A>\n  <B/>\n</A>");
        assert_eq!(positions.position(0), Ok(Position::new(0, 0)));
        assert_eq!(positions.position(3), Ok(Position::new(0, 3)));
        assert_eq!(positions.position(4), Ok(Position::new(1, 0)));
        assert_eq!(positions.position(6), Ok(Position::new(1, 2)));
        assert_eq!(positions.position(15), Ok(Position::new(2, 4)));
        assert_eq!(
            positions.position(16),
            Err(ModelError::OffsetOutOfRange {
                offset: 16,
                length: 15
            })
        );
    }

    #[test]
    fn test_offset() {
        let positions = TextPositions::new("<A>\n  <B/>\n</A>");
        assert_eq!(positions.offset(Position::new(0, 0)), Ok(0));
        assert_eq!(positions.offset(Position::new(1, 2)), Ok(6));
        assert_eq!(positions.offset(Position::new(2, 4)), Ok(15));
        assert_eq!(
            positions.offset(Position::new(3, 0)),
            Err(ModelError::PositionOutOfRange { line: 3, column: 0 })
        );
        assert_eq!(
            positions.offset(Position::new(0, 9)),
            Err(ModelError::PositionOutOfRange { line: 0, column: 9 })
        );
    }

    #[test]
    fn test_columns_count_characters() {
        let positions = TextPositions::new("<Ä é='ü'/>");
        // 'Ä' takes two bytes
        assert_eq!(positions.position(4), Ok(Position::new(0, 3)));
        assert_eq!(positions.offset(Position::new(0, 3)), Ok(4));
    }

    #[test]
    fn test_range() {
        let positions = TextPositions::new("<A>\n</A>");
        assert_eq!(
            positions.range(TextSpan::new(0, 8)),
            Ok(Range::new(Position::new(0, 0), Position::new(1, 4)))
        );
        assert_eq!(
            positions.range(TextSpan::new(5, 2)),
            Err(ModelError::InvertedSpan { start: 5, end: 2 })
        );
        assert_eq!(
            positions.range(TextSpan::new(0, 9)),
            Err(ModelError::SpanOutOfBounds {
                start: 0,
                end: 9,
                length: 8
            })
        );
    }

    #[test]
    fn test_range_contains() {
        let outer = Range::new(Position::new(0, 0), Position::new(2, 4));
        let inner = Range::new(Position::new(1, 2), Position::new(1, 6));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains_position(Position::new(2, 4)));
        assert!(!inner.contains_position(Position::new(2, 0)));
    }
}
