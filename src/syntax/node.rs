//! Syntax tree node definitions

use super::span::TextSpan;

/// Root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlDocument {
    /// Top-level nodes in document order
    pub children: Vec<XmlNode>,
    /// Span of the whole text
    pub span: TextSpan,
}

impl XmlDocument {
    /// The first top-level element, if any.
    pub fn root_element(&self) -> Option<&XmlNode> {
        self.children.iter().find(|node| node.is_element())
    }
}

/// Any node that can appear in element content or at document level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XmlNode {
    /// `<Name ...>...</Name>`, possibly unterminated
    Element(XmlElementSyntax),

    /// `<Name .../>`
    EmptyElement(XmlEmptyElementSyntax),

    /// Character data between tags
    Text(XmlTextSyntax),

    /// `<!-- ... -->`
    Comment { content: String, span: TextSpan },

    /// `<![CDATA[ ... ]]>`; `content` is taken verbatim
    CData { content: String, span: TextSpan },

    /// `<? ... ?>`
    ProcessingInstruction { content: String, span: TextSpan },
}

impl XmlNode {
    pub fn span(&self) -> TextSpan {
        match self {
            Self::Element(e) => e.span,
            Self::EmptyElement(e) => e.span,
            Self::Text(t) => t.span,
            Self::Comment { span, .. } => *span,
            Self::CData { span, .. } => *span,
            Self::ProcessingInstruction { span, .. } => *span,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_) | Self::EmptyElement(_))
    }

    /// Is this a self-closing element?
    pub fn is_self_closing(&self) -> bool {
        matches!(self, Self::EmptyElement(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element(e) => Some(&e.name),
            Self::EmptyElement(e) => Some(&e.name),
            _ => None,
        }
    }
}

/// An element with a start tag and (usually) content and an end tag.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlElementSyntax {
    pub name: String,

    /// Span of `<Name ...>`; missing when the tag was never closed with `>`
    pub start_tag: Option<TextSpan>,

    /// Span of `</Name>`; missing when the element was never closed
    pub end_tag: Option<TextSpan>,

    pub attributes: Vec<XmlAttributeSyntax>,

    /// Child nodes in document order
    pub content: Vec<XmlNode>,

    /// Span of the whole element, tags included
    pub span: TextSpan,
}

impl Drop for XmlElementSyntax {
    // flattened so dropping a deeply nested tree does not recurse
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.content);
        while let Some(node) = pending.pop() {
            if let XmlNode::Element(mut element) = node {
                pending.append(&mut element.content);
            }
        }
    }
}

/// A self-closing element.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlEmptyElementSyntax {
    pub name: String,
    pub attributes: Vec<XmlAttributeSyntax>,
    pub span: TextSpan,
}

/// `name="value"`, or whatever part of it has been typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlAttributeSyntax {
    pub name: String,
    pub name_span: Option<TextSpan>,

    /// Unquoted value
    pub value: Option<String>,

    /// Span of the value, quotes excluded
    pub value_span: Option<TextSpan>,

    pub span: TextSpan,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlTextSyntax {
    pub value: String,
    pub span: TextSpan,
}
