use nom::character::complete::{char, multispace0};
use nom::Parser;

use crate::expression::node::ListSeparator;
use crate::syntax::{Span, TextSpan};

use super::ExpressionResult;

/// parse a list separator: optional whitespace, `;`, optional whitespace
pub fn separator(input: Span) -> ExpressionResult<ListSeparator> {
    let start = input;
    let (input, leading) = multispace0(input)?;
    let (input, _) = char(';').parse(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        ListSeparator {
            separator_offset: leading.fragment().len(),
            span: TextSpan::between(start, input),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<(usize, ListSeparator)> {
        separator(Span::new(input))
            .ok()
            .map(|(rest, separator)| (rest.location_offset(), separator))
    }

    #[test]
    fn test_separator() {
        assert_eq!(
            parse(";"),
            Some((
                1,
                ListSeparator {
                    separator_offset: 0,
                    span: TextSpan::new(0, 1)
                }
            ))
        );
        assert_eq!(
            parse("  ;\tnext"),
            Some((
                4,
                ListSeparator {
                    separator_offset: 2,
                    span: TextSpan::new(0, 4)
                }
            ))
        );
        assert_eq!(parse(" a;"), None);
        assert_eq!(parse(""), None);
    }
}
