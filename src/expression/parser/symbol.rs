use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric1};
use nom::combinator::recognize;
use nom::error::context;
use nom::multi::many0;
use nom::sequence::pair;
use nom::Parser;

use crate::expression::node::SymbolExpression;
use crate::syntax::{Span, TextSpan};

use super::ExpressionResult;

pub fn identifier(input: Span) -> ExpressionResult<Span> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// parse a bare symbol like `Configuration` or `_Internal2`
pub fn symbol(input: Span) -> ExpressionResult<SymbolExpression> {
    let start = input;
    let (input, name) = context("symbol", identifier).parse(input)?;

    Ok((
        input,
        SymbolExpression {
            name: name.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<(&str, SymbolExpression)> {
        symbol(Span::new(input))
            .ok()
            .map(|(rest, symbol)| (*rest.fragment(), symbol))
    }

    #[test]
    fn test_property_names() {
        for name in [
            "Configuration",
            "TargetFramework",
            "NETCoreSdkVersion8",
            "_IsPublishing",
            "MSBuild_Extensions2_Path",
        ] {
            let (rest, matched) = identifier(Span::new(name)).unwrap();
            assert_eq!(*matched.fragment(), name);
            assert!(rest.fragment().is_empty());
        }

        assert!(identifier(Span::new("8Bit")).is_err());
        assert!(identifier(Span::new("$(Configuration)")).is_err());
        assert!(identifier(Span::new("-Debug")).is_err());
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        for (input, name, rest) in [
            ("Foo-Bar", "Foo", "-Bar"),
            ("Net8.0", "Net8", ".0"),
            ("Debug|AnyCPU", "Debug", "|AnyCPU"),
        ] {
            let (remaining, matched) = identifier(Span::new(input)).unwrap();
            assert_eq!(*matched.fragment(), name);
            assert_eq!(*remaining.fragment(), rest);
        }
    }

    #[test]
    fn test_symbol() {
        assert_eq!(
            parse("Debug"),
            Some((
                "",
                SymbolExpression {
                    name: "Debug".to_string(),
                    span: TextSpan::new(0, 5)
                }
            ))
        );
        assert_eq!(
            parse("A==B"),
            Some((
                "==B",
                SymbolExpression {
                    name: "A".to_string(),
                    span: TextSpan::new(0, 1)
                }
            ))
        );
    }
}
