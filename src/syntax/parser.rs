//! Error-tolerant XML syntax parser
//!
//! Documents being edited are incomplete most of the time, so nothing here
//! fails: unterminated tags produce elements with missing tag spans and
//! characters that fit nowhere are skipped.
//!
//! Nesting is tracked on an explicit stack of open elements rather than by
//! recursion, so depth is bounded only by memory.

use std::collections::HashMap;

use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_till, take_till1, take_until, take_while, take_while1},
    character::complete::{char, multispace0, one_of},
    combinator::{opt, rest},
    sequence::preceded,
    IResult, Parser,
};

use super::node::*;
use super::span::{Span, TextSpan};

type ParseResult<'a, T> = IResult<Span<'a>, T>;

/// Parse a whole document.
pub fn parse_document(text: &str) -> XmlDocument {
    let mut input = Span::new(text);
    let mut tree = TreeBuilder::default();

    loop {
        let fragment = *input.fragment();
        if fragment.is_empty() {
            break;
        }

        if fragment.starts_with("</") {
            input = parse_end_tag(input, &mut tree);
            continue;
        }

        if let Ok((rest, node)) = parse_comment(input) {
            tree.push(node);
            input = rest;
            continue;
        }

        if let Ok((rest, node)) = parse_cdata(input) {
            tree.push(node);
            input = rest;
            continue;
        }

        if let Ok((rest, node)) = parse_processing_instruction(input) {
            tree.push(node);
            input = rest;
            continue;
        }

        if let Ok((rest, start_tag)) = parse_start_tag(input) {
            match start_tag {
                StartTag::Complete(node) => tree.push(node),
                StartTag::Open(element) => tree.open(element),
            }
            input = rest;
            continue;
        }

        if let Ok((rest, text)) = parse_text(input) {
            // whitespace between tags is trivia
            if !text.value.trim().is_empty() {
                tree.push(XmlNode::Text(text));
            }
            input = rest;
            continue;
        }

        input = skip(input, 1);
    }

    // whatever is still open ends with the document
    while tree.close(None, text.len()) {}

    XmlDocument {
        children: tree.children,
        span: TextSpan::new(0, text.len()),
    }
}

/// An element whose start tag has been read but whose content has not ended.
struct OpenElement<'a> {
    name: &'a str,
    start_tag: TextSpan,
    attributes: Vec<XmlAttributeSyntax>,
    content: Vec<XmlNode>,
}

impl OpenElement<'_> {
    fn finish(self, end_tag: Option<TextSpan>, end: usize) -> XmlNode {
        XmlNode::Element(XmlElementSyntax {
            name: self.name.to_string(),
            span: TextSpan::new(self.start_tag.start, end),
            start_tag: Some(self.start_tag),
            end_tag,
            attributes: self.attributes,
            content: self.content,
        })
    }
}

/// What a start tag turned out to be.
enum StartTag<'a> {
    /// `<Name .../>`, or a tag that never reached its `>`
    Complete(XmlNode),
    /// `<Name ...>`; its content follows
    Open(OpenElement<'a>),
}

/// Open elements, innermost last, and the finished top-level nodes.
#[derive(Default)]
struct TreeBuilder<'a> {
    stack: Vec<OpenElement<'a>>,
    /// Stack indices of the open elements with each name
    by_name: HashMap<&'a str, Vec<usize>>,
    children: Vec<XmlNode>,
}

impl<'a> TreeBuilder<'a> {
    /// Add a finished node to the innermost open element.
    fn push(&mut self, node: XmlNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.content.push(node),
            None => self.children.push(node),
        }
    }

    fn open(&mut self, element: OpenElement<'a>) {
        self.by_name
            .entry(element.name)
            .or_default()
            .push(self.stack.len());
        self.stack.push(element);
    }

    /// Close the innermost open element; false when nothing is open.
    fn close(&mut self, end_tag: Option<TextSpan>, end: usize) -> bool {
        let Some(element) = self.stack.pop() else {
            return false;
        };
        if let Some(indices) = self.by_name.get_mut(element.name) {
            indices.pop();
        }

        let node = element.finish(end_tag, end);
        self.push(node);
        true
    }

    /// Stack index of the element a closing tag called `name` belongs to.
    ///
    /// That is the innermost open element with the same name, or the current
    /// element when no open element has it.
    fn owner_of(&self, name: &str) -> Option<usize> {
        self.by_name
            .get(name)
            .and_then(|indices| indices.last().copied())
            .or_else(|| self.stack.len().checked_sub(1))
    }
}

/// Parse `</Name>` and close the element it belongs to.
///
/// Elements nested inside the owner are closed first, without end tags. With
/// nothing open the tag is skipped.
fn parse_end_tag<'a>(input: Span<'a>, tree: &mut TreeBuilder<'_>) -> Span<'a> {
    let (rest, end_tag) = match parse_closing_tag(input) {
        Ok(parsed) => parsed,
        Err(_) => return skip(input, 1),
    };

    let Some(owner) = tree.owner_of(closing_tag_name(input)) else {
        return rest;
    };

    let offset = input.location_offset();
    while tree.stack.len() > owner + 1 {
        tree.close(None, offset);
    }
    tree.close(Some(end_tag), rest.location_offset());
    rest
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '=' | '"' | '\'')
}

/// Parse `<!-- ... -->`; an unterminated comment runs to end of input.
fn parse_comment(input: Span) -> ParseResult<XmlNode> {
    let start = input;
    let (input, _) = tag("<!--").parse(input)?;
    let (input, content) = alt((take_until("-->"), rest)).parse(input)?;
    let (input, _) = opt(tag("-->")).parse(input)?;

    Ok((
        input,
        XmlNode::Comment {
            content: content.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

/// Parse `<![CDATA[ ... ]]>`; an unterminated section runs to end of input.
fn parse_cdata(input: Span) -> ParseResult<XmlNode> {
    let start = input;
    let (input, _) = tag("<![CDATA[").parse(input)?;
    let (input, content) = alt((take_until("]]>"), rest)).parse(input)?;
    let (input, _) = opt(tag("]]>")).parse(input)?;

    Ok((
        input,
        XmlNode::CData {
            content: content.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

/// Parse `<? ... ?>`; an unterminated instruction runs to end of input.
fn parse_processing_instruction(input: Span) -> ParseResult<XmlNode> {
    let start = input;
    let (input, _) = tag("<?").parse(input)?;
    let (input, content) = alt((take_until("?>"), rest)).parse(input)?;
    let (input, _) = opt(tag("?>")).parse(input)?;

    Ok((
        input,
        XmlNode::ProcessingInstruction {
            content: content.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

fn parse_text(input: Span) -> ParseResult<XmlTextSyntax> {
    let start = input;
    let (input, value) = take_till1(|c: char| c == '<').parse(input)?;

    Ok((
        input,
        XmlTextSyntax {
            value: value.fragment().to_string(),
            span: TextSpan::between(start, input),
        },
    ))
}

/// Parse a start tag with its attributes.
fn parse_start_tag<'a>(input: Span<'a>) -> ParseResult<'a, StartTag<'a>> {
    let start = input;
    let (input, _) = char('<').parse(input)?;
    let (mut input, name) = take_while(is_name_char).parse(input)?;
    let name = *name.fragment();

    let mut attributes = Vec::new();
    // end of the last thing that belonged to the tag, for unterminated tags
    let mut tag_end = input;

    loop {
        let (rest, _) = multispace0(input)?;
        input = rest;
        let fragment = *input.fragment();

        if fragment.starts_with("/>") {
            let (input, _) = tag("/>").parse(input)?;
            return Ok((
                input,
                StartTag::Complete(XmlNode::EmptyElement(XmlEmptyElementSyntax {
                    name: name.to_string(),
                    attributes,
                    span: TextSpan::between(start, input),
                })),
            ));
        }

        if fragment.starts_with('>') {
            let (input, _) = char('>').parse(input)?;
            return Ok((
                input,
                StartTag::Open(OpenElement {
                    name,
                    start_tag: TextSpan::between(start, input),
                    attributes,
                    content: Vec::new(),
                }),
            ));
        }

        if fragment.is_empty() || fragment.starts_with('<') {
            return Ok((
                tag_end,
                StartTag::Complete(XmlNode::Element(XmlElementSyntax {
                    name: name.to_string(),
                    start_tag: None,
                    end_tag: None,
                    attributes,
                    content: Vec::new(),
                    span: TextSpan::between(start, tag_end),
                })),
            ));
        }

        match parse_attribute(input) {
            Ok((rest, attribute)) => {
                attributes.push(attribute);
                input = rest;
            }
            Err(_) => input = skip(input, 1),
        }
        tag_end = input;
    }
}

fn closing_tag_name<'a>(input: Span<'a>) -> &'a str {
    let fragment: &'a str = *input.fragment();
    let name = fragment.strip_prefix("</").unwrap_or(fragment);
    let end = name.find(|c: char| !is_name_char(c)).unwrap_or(name.len());
    &name[..end]
}

/// Parse `</Name>`; a missing `>` ends the tag after its name.
fn parse_closing_tag(input: Span) -> ParseResult<TextSpan> {
    let start = input;
    let (input, _) = tag("</").parse(input)?;
    let (input, _) = take_while(is_name_char).parse(input)?;
    let name_end = input;
    let (input, close) = opt(preceded(multispace0, char('>'))).parse(input)?;

    match close {
        Some(_) => Ok((input, TextSpan::between(start, input))),
        None => Ok((name_end, TextSpan::between(start, name_end))),
    }
}

/// Parse `name`, `name=` or `name="value"`.
fn parse_attribute(input: Span) -> ParseResult<XmlAttributeSyntax> {
    let start = input;
    let (input, name) = take_while1(is_name_char).parse(input)?;
    let name_span = TextSpan::between(start, input);
    let name = name.fragment().to_string();

    let (after_equals, equals) = opt(preceded(multispace0, char('='))).parse(input)?;
    if equals.is_none() {
        return Ok((
            input,
            XmlAttributeSyntax {
                name,
                name_span: Some(name_span),
                value: None,
                value_span: None,
                span: name_span,
            },
        ));
    }

    let (value_start, _) = multispace0(after_equals)?;
    match quoted_value(value_start) {
        Ok((input, (value, value_span))) => Ok((
            input,
            XmlAttributeSyntax {
                name,
                name_span: Some(name_span),
                value: Some(value),
                value_span: Some(value_span),
                span: TextSpan::between(start, input),
            },
        )),
        Err(_) => Ok((
            after_equals,
            XmlAttributeSyntax {
                name,
                name_span: Some(name_span),
                value: None,
                value_span: None,
                span: TextSpan::between(start, after_equals),
            },
        )),
    }
}

/// Parse `"value"` or `'value'`, returning the value and its span without quotes.
fn quoted_value(input: Span) -> ParseResult<(String, TextSpan)> {
    let (input, quote) = one_of("\"'").parse(input)?;
    let value_start = input;
    let (input, value) = take_till(move |c: char| c == quote || c == '<').parse(input)?;
    let value_end = input;
    let (input, _) = char(quote).parse(input)?;

    Ok((
        input,
        (
            value.fragment().to_string(),
            TextSpan::between(value_start, value_end),
        ),
    ))
}

fn skip(input: Span, count: usize) -> Span {
    match take::<usize, Span, nom::error::Error<Span>>(count).parse(input) {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}
