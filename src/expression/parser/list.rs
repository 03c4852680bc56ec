use nom::combinator::opt;
use nom::multi::many0;
use nom::Parser;

use crate::expression::node::{EmptyListItem, ExpressionList, ExpressionNode};
use crate::syntax::{Span, TextSpan};

use super::expression::expression;
use super::separator::separator;
use super::ExpressionResult;

/// parse a separator at the start of a list, with a placeholder for the empty slot before it
fn leading_separator(input: Span) -> ExpressionResult<[ExpressionNode; 2]> {
    let (input, separator) = separator(input)?;
    let empty = EmptyListItem {
        span: TextSpan::empty_at(separator.span.start),
    };

    Ok((input, [empty.into(), separator.into()]))
}

fn separator_with_item(input: Span) -> ExpressionResult<[ExpressionNode; 2]> {
    let (input, separator) = separator(input)?;
    let (input, item) = expression(input)?;

    Ok((input, [separator.into(), item]))
}

/// parse a semicolon-delimited list of expressions like `'a'; B == C`
pub fn expression_list(input: Span) -> ExpressionResult<ExpressionList> {
    let start = input;
    let (input, leading) = opt(leading_separator).parse(input)?;
    let (input, first) = expression(input)?;
    let (input, remaining) = many0(separator_with_item).parse(input)?;

    let mut children: Vec<ExpressionNode> = leading.into_iter().flatten().collect();
    children.push(first);
    children.extend(remaining.into_iter().flatten());

    Ok((
        input,
        ExpressionList {
            children,
            span: TextSpan::between(start, input),
        },
    ))
}
