//! Expression tree definitions
//!
//! Spans are byte offsets into the text handed to the parser.

use crate::syntax::TextSpan;

/// Kind of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionKind {
    /// A semicolon-delimited list of simple items
    SimpleList,
    SimpleListItem,
    ListSeparator,
    /// A semicolon-delimited list of expressions
    List,
    /// Placeholder for an empty slot in an expression list
    EmptyListItem,
    QuotedString,
    Comparison,
    Symbol,
}

/// Kind of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonKind {
    /// `==`
    Equality,
    /// `!=`
    Inequality,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNode {
    SimpleList(SimpleList),
    SimpleListItem(SimpleListItem),
    ListSeparator(ListSeparator),
    ExpressionList(ExpressionList),
    EmptyListItem(EmptyListItem),
    QuotedString(QuotedStringExpression),
    Symbol(SymbolExpression),
    Comparison(ComparisonExpression),
}

impl ExpressionNode {
    pub fn span(&self) -> TextSpan {
        match self {
            Self::SimpleList(n) => n.span,
            Self::SimpleListItem(n) => n.span,
            Self::ListSeparator(n) => n.span,
            Self::ExpressionList(n) => n.span,
            Self::EmptyListItem(n) => n.span,
            Self::QuotedString(n) => n.span,
            Self::Symbol(n) => n.span,
            Self::Comparison(n) => n.span,
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::SimpleList(_) => ExpressionKind::SimpleList,
            Self::SimpleListItem(_) => ExpressionKind::SimpleListItem,
            Self::ListSeparator(_) => ExpressionKind::ListSeparator,
            Self::ExpressionList(_) => ExpressionKind::List,
            Self::EmptyListItem(_) => ExpressionKind::EmptyListItem,
            Self::QuotedString(_) => ExpressionKind::QuotedString,
            Self::Symbol(_) => ExpressionKind::Symbol,
            Self::Comparison(_) => ExpressionKind::Comparison,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::ListSeparator(_))
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<&ExpressionNode> {
        match self {
            Self::SimpleList(list) => list.children.iter().collect(),
            Self::ExpressionList(list) => list.children.iter().collect(),
            Self::Comparison(comparison) => vec![&*comparison.left, &*comparison.right],
            _ => Vec::new(),
        }
    }
}

/// A semicolon-delimited list of raw text items.
///
/// Children alternate item, separator, item, ..., item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleList {
    pub children: Vec<ExpressionNode>,
    pub span: TextSpan,
}

impl SimpleList {
    /// The items, without separators.
    pub fn items(&self) -> impl Iterator<Item = &SimpleListItem> {
        self.children.iter().filter_map(|child| match child {
            ExpressionNode::SimpleListItem(item) => Some(item),
            _ => None,
        })
    }

    pub fn separators(&self) -> impl Iterator<Item = &ListSeparator> {
        self.children.iter().filter_map(|child| match child {
            ExpressionNode::ListSeparator(separator) => Some(separator),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleListItem {
    pub value: String,
    pub span: TextSpan,
}

/// `;` and the whitespace around it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListSeparator {
    /// Offset of the `;` from the start of `span`
    pub separator_offset: usize,
    pub span: TextSpan,
}

impl ListSeparator {
    /// Absolute offset of the `;`.
    pub fn separator_position(&self) -> usize {
        self.span.start + self.separator_offset
    }
}

/// A semicolon-delimited list of expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionList {
    pub children: Vec<ExpressionNode>,
    pub span: TextSpan,
}

impl ExpressionList {
    /// The items (including empty placeholders), without separators.
    pub fn items(&self) -> impl Iterator<Item = &ExpressionNode> {
        self.children.iter().filter(|child| !child.is_separator())
    }
}

/// Zero-width marker for the slot before a leading separator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmptyListItem {
    pub span: TextSpan,
}

/// `'content'`; there are no escape sequences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotedStringExpression {
    pub content: String,
    pub span: TextSpan,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolExpression {
    pub name: String,
    pub span: TextSpan,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonExpression {
    pub kind: ComparisonKind,
    pub left: Box<ExpressionNode>,
    pub right: Box<ExpressionNode>,
    pub span: TextSpan,
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ExpressionNode {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    SimpleList(SimpleList),
    SimpleListItem(SimpleListItem),
    ListSeparator(ListSeparator),
    ExpressionList(ExpressionList),
    EmptyListItem(EmptyListItem),
    QuotedString(QuotedStringExpression),
    Symbol(SymbolExpression),
    Comparison(ComparisonExpression),
);
