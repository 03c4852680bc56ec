//! Raw offset spans

use nom_locate::LocatedSpan;

/// Input type for the located parsers.
pub type Span<'a> = LocatedSpan<&'a str>;

/// A half-open range of byte offsets into the source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Span covering everything between two located inputs.
    pub fn between(start: Span, end: Span) -> Self {
        Self::new(start.location_offset(), end.location_offset())
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Does this span fully enclose `other`?
    pub fn contains(&self, other: TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The source text covered by this span.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use nom::bytes::complete::take;
    use nom::Parser;

    use super::*;

    #[test]
    fn test_span_between() {
        let input = Span::new("<Project>");
        let (rest, _) = take::<usize, Span, nom::error::Error<Span>>(1usize)
            .parse(input)
            .unwrap();
        assert_eq!(TextSpan::between(input, rest), TextSpan::new(0, 1));
    }

    #[test]
    fn test_contains() {
        let outer = TextSpan::new(2, 10);
        assert!(outer.contains(TextSpan::new(2, 10)));
        assert!(outer.contains(TextSpan::new(4, 4)));
        assert!(!outer.contains(TextSpan::new(1, 4)));
        assert!(!outer.contains(TextSpan::new(9, 11)));
    }

    #[test]
    fn test_slice() {
        assert_eq!(TextSpan::new(1, 8).slice("<Project/>"), Some("Project"));
        assert_eq!(TextSpan::new(4, 40).slice("<a/>"), None);
        assert!(TextSpan::empty_at(3).is_empty());
    }
}
