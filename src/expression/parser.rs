//! Grammar for MSBuild expressions
//!
//! Every entry point requires the grammar to consume the whole text; anything
//! left over is reported as an [`ExpressionError`].

mod comparison;
mod expression;
mod list;
mod quoted_string;
mod separator;
mod simple_list;
mod symbol;

use nom::combinator::all_consuming;
use nom::error::ErrorKind;
use nom::{Finish, Parser};
use nom_language::error::{VerboseError, VerboseErrorKind};

use crate::error::ExpressionError;
use crate::result::ParseResult;
use crate::syntax::Span;

use super::node::{ExpressionList, ExpressionNode, SimpleList};

type ExpressionResult<'a, O> = ParseResult<Span<'a>, O>;

/// Parse a semicolon-delimited list of raw items, such as `a;b;c`.
pub fn parse_simple_list(text: &str) -> Result<SimpleList, ExpressionError> {
    parse_all(simple_list::simple_list, text)
}

/// Parse a semicolon-delimited list of expressions, such as `'a'; B == C`.
pub fn parse_expression_list(text: &str) -> Result<ExpressionList, ExpressionError> {
    parse_all(list::expression_list, text)
}

/// Parse a single expression, such as `'$(Configuration)' == 'Debug'`.
pub fn parse_expression(text: &str) -> Result<ExpressionNode, ExpressionError> {
    parse_all(expression::expression, text)
}

fn parse_all<'a, O, P>(parser: P, text: &'a str) -> Result<O, ExpressionError>
where
    P: Parser<Span<'a>, Output = O, Error = VerboseError<Span<'a>>>,
{
    all_consuming(parser)
        .parse(Span::new(text))
        .finish()
        .map(|(_, output)| output)
        .map_err(|error| {
            let error = to_expression_error(error);
            log::trace!("failed to parse expression {:?}: {}", text, error);
            error
        })
}

fn to_expression_error(error: VerboseError<Span>) -> ExpressionError {
    let offset = error
        .errors
        .first()
        .map(|(input, _)| input.location_offset())
        .unwrap_or_default();

    // innermost context wins
    let expected = error
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(context) => Some(*context),
            VerboseErrorKind::Nom(ErrorKind::Eof) => Some("end of input"),
            _ => None,
        })
        .unwrap_or("expression");

    ExpressionError { offset, expected }
}
