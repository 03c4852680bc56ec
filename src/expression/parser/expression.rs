use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::multispace0;
use nom::combinator::{eof, map, peek, value};
use nom::error::context;
use nom::sequence::{delimited, preceded, terminated};
use nom::Parser;

use crate::expression::node::ExpressionNode;
use crate::syntax::Span;

use super::comparison::comparison;
use super::quoted_string::quoted_string;
use super::symbol::symbol;
use super::ExpressionResult;

/// parse an expression, surrounded by optional whitespace
///
/// Alternatives are tried in order: quoted string, symbol, comparison. A string
/// or symbol only counts when it runs to the end of the expression, otherwise
/// `A == B` would stop after `A`.
pub fn expression(input: Span) -> ExpressionResult<ExpressionNode> {
    context(
        "expression",
        delimited(
            multispace0,
            alt((
                terminated(map(quoted_string, ExpressionNode::from), peek(expression_end)),
                terminated(map(symbol, ExpressionNode::from), peek(expression_end)),
                comparison,
            )),
            multispace0,
        ),
    )
    .parse(input)
}

/// match what may follow a complete expression: end of input or a list separator
fn expression_end(input: Span) -> ExpressionResult<()> {
    value((), preceded(multispace0, alt((eof, tag(";"))))).parse(input)
}

#[cfg(test)]
mod tests {
    use crate::expression::node::{ComparisonKind, ExpressionKind};
    use crate::syntax::TextSpan;

    use super::*;

    fn parse(input: &str) -> Option<(&str, ExpressionNode)> {
        expression(Span::new(input))
            .ok()
            .map(|(rest, node)| (*rest.fragment(), node))
    }

    #[test]
    fn test_expression_alternatives() {
        let (rest, node) = parse(" 'a' ").unwrap();
        assert_eq!(rest, "");
        assert_eq!(node.kind(), ExpressionKind::QuotedString);
        assert_eq!(node.span(), TextSpan::new(1, 4));

        let (rest, node) = parse("A;B").unwrap();
        assert_eq!(rest, ";B");
        assert_eq!(node.kind(), ExpressionKind::Symbol);

        let (rest, node) = parse("A == B").unwrap();
        assert_eq!(rest, "");
        match node {
            ExpressionNode::Comparison(comparison) => {
                assert_eq!(comparison.kind, ComparisonKind::Equality);
                assert_eq!(comparison.span, TextSpan::new(0, 6));
            }
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_expression_rejects_trailing_garbage() {
        assert_eq!(parse("A B"), None);
        assert_eq!(parse("'a' b"), None);
        assert_eq!(parse(""), None);
    }
}
