use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::cut;
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::Parser;

use crate::expression::node::QuotedStringExpression;
use crate::syntax::{Span, TextSpan};

use super::ExpressionResult;

/// parse a string like `'Debug'`, taken verbatim (there are no escapes)
pub fn quoted_string(input: Span) -> ExpressionResult<QuotedStringExpression> {
    let start = input;
    let (input, content) = context(
        "quoted string",
        preceded(
            char('\''),
            cut(terminated(take_till(|c: char| c == '\''), char('\''))),
        ),
    )
    .parse(input)?;

    Ok((
        input,
        QuotedStringExpression {
            content: content.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}
