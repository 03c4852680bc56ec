use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::char;
use nom::combinator::{peek, recognize};
use nom::error::context;
use nom::multi::many0;
use nom::Parser;

use crate::expression::node::{ExpressionNode, SimpleList, SimpleListItem};
use crate::syntax::{Span, TextSpan};

use super::separator::separator;
use super::ExpressionResult;

fn is_list_char(c: char) -> bool {
    c != ';'
}

/// parse a list item, which may be empty
pub fn item(input: Span) -> ExpressionResult<SimpleListItem> {
    let start = input;
    let (input, value) = take_while(is_list_char).parse(input)?;

    Ok((
        input,
        SimpleListItem {
            value: value.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

/// parse a list item after a separator
///
/// It may only be empty when another separator follows, so a list never ends
/// in a separator.
fn following_item(input: Span) -> ExpressionResult<SimpleListItem> {
    let start = input;
    let (input, value) = context(
        "list item",
        alt((take_while1(is_list_char), recognize(peek(char(';'))))),
    )
    .parse(input)?;

    Ok((
        input,
        SimpleListItem {
            value: value.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

fn separator_with_item(input: Span) -> ExpressionResult<[ExpressionNode; 2]> {
    let (input, separator) = separator(input)?;
    let (input, item) = following_item(input)?;

    Ok((input, [separator.into(), item.into()]))
}

/// parse a semicolon-delimited list of raw items like `a;b;c`
pub fn simple_list(input: Span) -> ExpressionResult<SimpleList> {
    let start = input;
    let (input, first) = item(input)?;
    let (input, remaining) = many0(separator_with_item).parse(input)?;

    let mut children: Vec<ExpressionNode> = vec![first.into()];
    children.extend(remaining.into_iter().flatten());

    Ok((
        input,
        SimpleList {
            children,
            span: TextSpan::between(start, input),
        },
    ))
}

#[cfg(test)]
mod tests {
    use crate::expression::node::ListSeparator;

    use super::*;

    fn item_node(value: &str, start: usize, end: usize) -> ExpressionNode {
        ExpressionNode::SimpleListItem(SimpleListItem {
            value: value.to_string(),
            span: TextSpan::new(start, end),
        })
    }

    fn separator_node(start: usize, end: usize, separator_offset: usize) -> ExpressionNode {
        ExpressionNode::ListSeparator(ListSeparator {
            separator_offset,
            span: TextSpan::new(start, end),
        })
    }

    #[test]
    fn test_item() {
        let (rest, item) = item(Span::new("a b;c")).unwrap();
        assert_eq!(*rest.fragment(), ";c");
        assert_eq!(item.value, "a b");
        assert_eq!(item.span, TextSpan::new(0, 3));

        let (_, empty) = super::item(Span::new(";")).unwrap();
        assert_eq!(empty.value, "");
        assert_eq!(empty.span, TextSpan::new(0, 0));
    }

    #[test]
    fn test_following_item() {
        let (rest, empty) = following_item(Span::new(";b")).unwrap();
        assert_eq!(*rest.fragment(), ";b");
        assert_eq!(empty.span, TextSpan::new(0, 0));

        assert!(following_item(Span::new("")).is_err());
    }

    #[test]
    fn test_simple_list_stops_before_dangling_separator() {
        let (rest, list) = simple_list(Span::new("a;b; ")).unwrap();
        assert_eq!(*rest.fragment(), "; ");
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.span, TextSpan::new(0, 3));
    }

    #[test]
    fn test_leading_separator() {
        let (rest, list) = simple_list(Span::new(";a")).unwrap();
        assert!(rest.fragment().is_empty());
        assert_eq!(
            list.children,
            vec![
                item_node("", 0, 0),
                separator_node(0, 1, 0),
                item_node("a", 1, 2),
            ]
        );
    }

    #[test]
    fn test_empty_items_between_separators() {
        let (rest, list) = simple_list(Span::new("a;;b")).unwrap();
        assert!(rest.fragment().is_empty());
        assert_eq!(
            list.children,
            vec![
                item_node("a", 0, 1),
                separator_node(1, 2, 0),
                item_node("", 2, 2),
                separator_node(2, 3, 0),
                item_node("b", 3, 4),
            ]
        );

        let (rest, list) = simple_list(Span::new(";;a")).unwrap();
        assert!(rest.fragment().is_empty());
        assert_eq!(list.items().count(), 3);
    }

    #[test]
    fn test_lone_separator_is_left_over() {
        let (rest, list) = simple_list(Span::new(";")).unwrap();
        assert_eq!(*rest.fragment(), ";");
        assert_eq!(list.children, vec![item_node("", 0, 0)]);
    }
}
