//! Derives the semantic model from the syntax tree
//!
//! A single pre-order walk classifies every element, attribute and text node,
//! then a second pass infers whitespace between each element's children.
//! Malformed markup never aborts the walk; it turns into invalid nodes.

use crate::error::Result;
use crate::position::{Range, TextPositions};
use crate::syntax::{
    TextSpan, XmlAttributeSyntax, XmlDocument, XmlElementSyntax, XmlEmptyElementSyntax, XmlNode,
};

use super::model::SemanticModel;
use super::node::*;

/// Step of the pre-order walk.
enum Visit<'s> {
    Enter(&'s XmlNode),
    /// Every child of the innermost open element has been visited
    Leave,
}

/// Traversal state for building one model.
pub(crate) struct SemanticModelBuilder<'p> {
    positions: &'p TextPositions,
    /// Elements currently being visited, innermost last
    element_stack: Vec<NodeId>,
    discovered: Vec<XsNode>,
}

impl<'p> SemanticModelBuilder<'p> {
    pub fn new(positions: &'p TextPositions) -> Self {
        Self {
            positions,
            element_stack: Vec::new(),
            discovered: Vec::new(),
        }
    }

    fn current_element(&self) -> Option<NodeId> {
        self.element_stack.last().copied()
    }

    pub fn visit_document(&mut self, document: &XmlDocument) -> Result<()> {
        for node in &document.children {
            self.visit(node)?;
        }
        Ok(())
    }

    /// Visit `node` and its descendants in document order.
    pub fn visit(&mut self, node: &XmlNode) -> Result<()> {
        let mut pending = vec![Visit::Enter(node)];

        while let Some(step) = pending.pop() {
            let node = match step {
                Visit::Enter(node) => node,
                Visit::Leave => {
                    self.pop_element();
                    continue;
                }
            };

            match node {
                XmlNode::Element(element) => {
                    self.visit_element(element)?;
                    pending.push(Visit::Leave);
                    pending.extend(element.content.iter().rev().map(Visit::Enter));
                }
                XmlNode::EmptyElement(element) => self.visit_empty_element(element)?,
                XmlNode::Text(text) => self.visit_text(&text.value, text.span)?,
                XmlNode::CData { content, span } => self.visit_text(content, *span)?,
                XmlNode::Comment { .. } | XmlNode::ProcessingInstruction { .. } => {}
            }
        }
        Ok(())
    }

    /// Classify an element and its attributes, leaving it open for its content.

    fn visit_element(&mut self, element: &XmlElementSyntax) -> Result<()> {
        let span = element.span;
        let range = self.positions.range(span)?;

        // a missing tag collapses onto the whole element, which marks it invalid below
        let opening_tag_span = element.start_tag.unwrap_or(span);
        let closing_tag_span = element.end_tag.unwrap_or(span);
        let opening_tag_range = self.positions.range(opening_tag_span)?;
        let closing_tag_range = self.positions.range(closing_tag_span)?;

        let (content_span, content_range) = if opening_tag_range.end <= closing_tag_range.start {
            (
                TextSpan::new(opening_tag_span.end, closing_tag_span.start),
                Range::new(opening_tag_range.end, closing_tag_range.start),
            )
        } else {
            (span, range)
        };

        let parent = self.current_element();
        let node = if is_blank(&element.name)
            || opening_tag_range == range
            || content_range == range
            || closing_tag_range == range
        {
            log::trace!("invalid element {:?} at {}", element.name, range);
            XsNode::InvalidElement(XsInvalidElement {
                name: element.name.clone(),
                range,
                span,
                has_content: true,
                attributes: Vec::new(),
                parent,
            })
        } else {
            log::trace!("element {:?} at {}", element.name, range);
            XsNode::ElementWithContent(XsElementWithContent {
                name: element.name.clone(),
                range,
                opening_tag_range,
                content_range,
                closing_tag_range,
                span,
                content_span,
                attributes: Vec::new(),
                content: Vec::new(),
                parent,
            })
        };

        self.push_element(node);

        for attribute in &element.attributes {
            self.visit_attribute(attribute)?;
        }
        Ok(())
    }

    fn visit_empty_element(&mut self, element: &XmlEmptyElementSyntax) -> Result<()> {
        let span = element.span;
        let range = self.positions.range(span)?;
        let parent = self.current_element();

        let node = if is_blank(&element.name) {
            log::trace!("invalid empty element at {}", range);
            XsNode::InvalidElement(XsInvalidElement {
                name: element.name.clone(),
                range,
                span,
                has_content: false,
                attributes: Vec::new(),
                parent,
            })
        } else {
            log::trace!("empty element {:?} at {}", element.name, range);
            XsNode::EmptyElement(XsEmptyElement {
                name: element.name.clone(),
                range,
                span,
                attributes: Vec::new(),
                parent,
            })
        };

        self.push_element(node);

        for attribute in &element.attributes {
            self.visit_attribute(attribute)?;
        }

        self.pop_element();
        Ok(())
    }

    fn visit_attribute(&mut self, attribute: &XmlAttributeSyntax) -> Result<()> {
        let Some(element) = self.current_element() else {
            log::debug!("ignoring attribute {:?} outside any element", attribute.name);
            return Ok(());
        };

        let span = attribute.span;
        let range = self.positions.range(span)?;
        let name_range = match attribute.name_span {
            Some(name_span) => self.positions.range(name_span)?,
            None => range,
        };
        let value_range = match attribute.value_span {
            Some(value_span) => self.positions.range(value_span)?,
            None => range,
        };

        let xs_attribute = XsAttribute {
            name: attribute.name.clone(),
            value: attribute.value.clone().unwrap_or_default(),
            range,
            name_range,
            value_range,
            span,
            element,
        };

        // `=` or the quoted value is missing
        let node = if is_blank(&attribute.name) || name_range == range || value_range == range {
            log::trace!("invalid attribute {:?} at {}", attribute.name, range);
            XsNode::InvalidAttribute(xs_attribute)
        } else {
            XsNode::Attribute(xs_attribute)
        };

        let id = self.add(node);
        if let Some(attributes) = self.discovered[element.0].attributes_mut() {
            attributes.push(id);
        }
        Ok(())
    }

    /// Attach character data, from text or a CDATA section, to the current element.
    fn visit_text(&mut self, value: &str, span: TextSpan) -> Result<()> {
        let range = self.positions.range(span)?;

        let Some(element) = self.current_element() else {
            log::debug!("ignoring text at {} outside any element", range);
            return Ok(());
        };
        if !self.discovered[element.0].range().contains(&range) {
            log::debug!("ignoring text at {} outside its element", range);
            return Ok(());
        }

        let id = self.add(XsNode::Text(XsElementText {
            value: value.to_string(),
            range,
            span,
            element,
        }));
        if let Some(content) = self.discovered[element.0].content_mut() {
            content.push(id);
        }
        Ok(())
    }

    /// Find the gaps between elements and record them as whitespace.
    pub fn infer_whitespace(&mut self) -> Result<()> {
        let mut gaps = Vec::new();

        for (index, node) in self.discovered.iter().enumerate() {
            let XsNode::ElementWithContent(element) = node else {
                continue;
            };

            let mut end_of_node = element.content_span.start;
            for child in &element.content {
                let child = &self.discovered[child.0];
                if !child.is_element() {
                    continue;
                }

                let start_of_next_node = child.span().start;
                if start_of_next_node > end_of_node {
                    gaps.push((NodeId(index), TextSpan::new(end_of_node, start_of_next_node)));
                }
                end_of_node = child.span().end;
            }

            // trailing whitespace before the closing tag
            let start_of_next_node = element.content_span.end;
            if start_of_next_node > end_of_node {
                gaps.push((NodeId(index), TextSpan::new(end_of_node, start_of_next_node)));
            }
        }

        for (parent, span) in gaps {
            let range = self.positions.range(span)?;
            self.add(XsNode::Whitespace(XsWhitespace {
                range,
                span,
                parent,
            }));
        }
        Ok(())
    }

    /// Sort everything discovered by range.
    pub fn finish(self) -> SemanticModel {
        let mut order: Vec<NodeId> = (0..self.discovered.len()).map(NodeId).collect();
        order.sort_by_key(|id| {
            let range = self.discovered[id.0].range();
            (range.start, range.end)
        });

        SemanticModel::new(self.discovered, order)
    }

    fn add(&mut self, node: XsNode) -> NodeId {
        let id = NodeId(self.discovered.len());
        self.discovered.push(node);
        id
    }

    fn push_element(&mut self, element: XsNode) -> NodeId {
        let id = self.add(element);

        if let Some(parent) = self.current_element() {
            if let Some(content) = self.discovered[parent.0].content_mut() {
                content.push(id);
            }
        }

        self.element_stack.push(id);
        id
    }

    fn pop_element(&mut self) {
        self.element_stack.pop();
    }
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
