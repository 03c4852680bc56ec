//! Semantic node definitions

use std::fmt;

use crate::position::Range;
use crate::syntax::TextSpan;

/// Index of a node within its [`SemanticModel`](super::SemanticModel).
///
/// Ids are only meaningful for the model that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Broad kind of a semantic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XsNodeKind {
    Element,
    Attribute,
    Text,
    Whitespace,
}

/// A node in the semantic model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XsNode {
    /// `<Name>...</Name>` with all of its tags present
    ElementWithContent(XsElementWithContent),

    /// `<Name/>`
    EmptyElement(XsEmptyElement),

    /// An element with a blank name or tags that were never delimited
    InvalidElement(XsInvalidElement),

    Attribute(XsAttribute),

    /// An attribute with a blank name, or missing `=` or value
    InvalidAttribute(XsAttribute),

    Text(XsElementText),

    /// Whitespace inferred between an element's children
    Whitespace(XsWhitespace),
}

impl XsNode {
    pub fn range(&self) -> Range {
        match self {
            Self::ElementWithContent(e) => e.range,
            Self::EmptyElement(e) => e.range,
            Self::InvalidElement(e) => e.range,
            Self::Attribute(a) | Self::InvalidAttribute(a) => a.range,
            Self::Text(t) => t.range,
            Self::Whitespace(w) => w.range,
        }
    }

    /// Byte span the node was built from.
    pub fn span(&self) -> TextSpan {
        match self {
            Self::ElementWithContent(e) => e.span,
            Self::EmptyElement(e) => e.span,
            Self::InvalidElement(e) => e.span,
            Self::Attribute(a) | Self::InvalidAttribute(a) => a.span,
            Self::Text(t) => t.span,
            Self::Whitespace(w) => w.span,
        }
    }

    pub fn kind(&self) -> XsNodeKind {
        match self {
            Self::ElementWithContent(_) | Self::EmptyElement(_) | Self::InvalidElement(_) => {
                XsNodeKind::Element
            }
            Self::Attribute(_) | Self::InvalidAttribute(_) => XsNodeKind::Attribute,
            Self::Text(_) => XsNodeKind::Text,
            Self::Whitespace(_) => XsNodeKind::Whitespace,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::InvalidElement(_) | Self::InvalidAttribute(_))
    }

    pub fn is_element(&self) -> bool {
        self.kind() == XsNodeKind::Element
    }

    /// Element or attribute name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ElementWithContent(e) => Some(&e.name),
            Self::EmptyElement(e) => Some(&e.name),
            Self::InvalidElement(e) => Some(&e.name),
            Self::Attribute(a) | Self::InvalidAttribute(a) => Some(&a.name),
            Self::Text(_) | Self::Whitespace(_) => None,
        }
    }

    /// The element that owns this node; `None` for top-level elements.
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Self::ElementWithContent(e) => e.parent,
            Self::EmptyElement(e) => e.parent,
            Self::InvalidElement(e) => e.parent,
            Self::Attribute(a) | Self::InvalidAttribute(a) => Some(a.element),
            Self::Text(t) => Some(t.element),
            Self::Whitespace(w) => Some(w.parent),
        }
    }

    /// Attributes of an element, in document order.
    pub fn attributes(&self) -> &[NodeId] {
        match self {
            Self::ElementWithContent(e) => &e.attributes,
            Self::EmptyElement(e) => &e.attributes,
            Self::InvalidElement(e) => &e.attributes,
            _ => &[],
        }
    }

    /// Child elements and text, in document order.
    pub fn content(&self) -> &[NodeId] {
        match self {
            Self::ElementWithContent(e) => &e.content,
            _ => &[],
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::ElementWithContent(e) => Some(&mut e.attributes),
            Self::EmptyElement(e) => Some(&mut e.attributes),
            Self::InvalidElement(e) => Some(&mut e.attributes),
            _ => None,
        }
    }

    pub(crate) fn content_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::ElementWithContent(e) => Some(&mut e.content),
            _ => None,
        }
    }
}

/// An element whose opening tag, content and closing tag were all found.
///
/// `opening_tag_range.end <= content_range.start <= content_range.end <= closing_tag_range.start`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsElementWithContent {
    pub name: String,
    pub range: Range,
    pub opening_tag_range: Range,
    pub content_range: Range,
    pub closing_tag_range: Range,
    pub span: TextSpan,
    /// Bytes between the opening and closing tags
    pub content_span: TextSpan,
    pub attributes: Vec<NodeId>,
    pub content: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsEmptyElement {
    pub name: String,
    pub range: Range,
    pub span: TextSpan,
    pub attributes: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsInvalidElement {
    pub name: String,
    pub range: Range,
    pub span: TextSpan,
    /// Was this written as an element with content (rather than self-closing)?
    pub has_content: bool,
    pub attributes: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsAttribute {
    pub name: String,
    /// Unquoted value, empty when none was typed
    pub value: String,
    pub range: Range,
    pub name_range: Range,
    pub value_range: Range,
    pub span: TextSpan,
    /// The element that declares the attribute
    pub element: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsElementText {
    pub value: String,
    pub range: Range,
    pub span: TextSpan,
    /// The element whose content includes the text
    pub element: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XsWhitespace {
    pub range: Range,
    pub span: TextSpan,
    pub parent: NodeId,
}
