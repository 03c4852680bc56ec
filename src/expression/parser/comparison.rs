use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::multispace0;
use nom::combinator::{map, value};
use nom::error::context;
use nom::Parser;

use crate::expression::node::{ComparisonExpression, ComparisonKind, ExpressionNode};
use crate::syntax::{Span, TextSpan};

use super::expression::expression;
use super::quoted_string::quoted_string;
use super::symbol::symbol;
use super::ExpressionResult;

pub fn comparison_operator(input: Span) -> ExpressionResult<ComparisonKind> {
    context(
        "comparison operator",
        alt((
            value(ComparisonKind::Equality, tag("==")),
            value(ComparisonKind::Inequality, tag("!=")),
        )),
    )
    .parse(input)
}

/// parse the left-hand side of a comparison
fn operand(input: Span) -> ExpressionResult<ExpressionNode> {
    alt((
        map(quoted_string, ExpressionNode::from),
        map(symbol, ExpressionNode::from),
    ))
    .parse(input)
}

/// parse a comparison like `'$(Configuration)' == 'Debug'`
///
/// The right-hand side is a full expression, so chains nest to the right:
/// `A == B != C` is `A == (B != C)`.
pub fn comparison(input: Span) -> ExpressionResult<ExpressionNode> {
    let (input, left) = operand(input)?;
    let (input, _) = multispace0(input)?;
    let (input, kind) = comparison_operator(input)?;
    let (input, _) = multispace0(input)?;
    let (input, right) = expression(input)?;

    let span = TextSpan::new(left.span().start, right.span().end);
    Ok((
        input,
        ComparisonExpression {
            kind,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
        .into(),
    ))
}
