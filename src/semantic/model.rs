use crate::error::Result;
use crate::position::{Position, TextPositions};
use crate::syntax::{parse_document, XmlDocument, XmlNode};

use super::builder::SemanticModelBuilder;
use super::node::*;

/// Every node discovered in a syntax tree, sorted by range.
///
/// Nodes are stored in discovery order and addressed by [`NodeId`]; elements refer
/// to their attributes and content by id, and every other node refers back to its
/// element the same way.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticModel {
    nodes: Vec<XsNode>,
    /// Ids sorted by `(range.start, range.end)`
    order: Vec<NodeId>,
}

impl SemanticModel {
    pub(crate) fn new(nodes: Vec<XsNode>, order: Vec<NodeId>) -> Self {
        Self { nodes, order }
    }

    /// Build the model for a whole document.
    pub fn build(document: &XmlDocument, positions: &TextPositions) -> Result<Self> {
        positions.range(document.span)?;

        let mut builder = SemanticModelBuilder::new(positions);
        builder.visit_document(document)?;
        builder.infer_whitespace()?;
        let model = builder.finish();

        log::debug!("built semantic model with {} nodes", model.len());
        Ok(model)
    }

    /// Build the model for a single node and its descendants.
    pub fn build_node(node: &XmlNode, positions: &TextPositions) -> Result<Self> {
        positions.range(node.span())?;

        let mut builder = SemanticModelBuilder::new(positions);
        builder.visit(node)?;
        builder.infer_whitespace()?;
        Ok(builder.finish())
    }

    /// Parse `text` and build its model.
    pub fn parse(text: &str) -> Result<Self> {
        let document = parse_document(text);
        Self::build(&document, &TextPositions::new(text))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&XsNode> {
        self.nodes.get(id.0)
    }

    /// All nodes, sorted by range.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &XsNode)> + '_ {
        self.order.iter().map(move |&id| (id, &self.nodes[id.0]))
    }

    /// All elements (valid or not), sorted by range.
    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &XsNode)> + '_ {
        self.nodes().filter(|(_, node)| node.is_element())
    }

    /// The element owning `id`.
    pub fn parent(&self, id: NodeId) -> Option<(NodeId, &XsNode)> {
        let parent = self.get(id)?.parent()?;
        Some((parent, self.get(parent)?))
    }

    /// Attributes of the element `id`, in document order.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &XsNode)> + '_ {
        self.children_of(id, XsNode::attributes)
    }

    /// Content of the element `id`, in document order.
    pub fn content(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &XsNode)> + '_ {
        self.children_of(id, XsNode::content)
    }

    /// The first attribute of element `id` called `name`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<(NodeId, &XsNode)> {
        self.attributes(id)
            .find(|(_, attribute)| attribute.name() == Some(name))
    }

    /// The innermost node whose range contains `position`.
    ///
    /// Among nodes with identical ranges the first in sorted order wins, so the
    /// text of an element beats the whitespace inferred over the same content.
    pub fn node_at(&self, position: Position) -> Option<(NodeId, &XsNode)> {
        let mut found: Option<(NodeId, &XsNode)> = None;

        for (id, node) in self.nodes() {
            let range = node.range();
            if range.start > position {
                break;
            }
            if !range.contains_position(position) {
                continue;
            }

            let innermost = match found {
                None => true,
                Some((_, best)) => {
                    let best = best.range();
                    range.start > best.start || range.end < best.end
                }
            };
            if innermost {
                found = Some((id, node));
            }
        }

        found
    }

    fn children_of<'m>(
        &'m self,
        id: NodeId,
        children: fn(&XsNode) -> &[NodeId],
    ) -> impl Iterator<Item = (NodeId, &'m XsNode)> + 'm {
        let ids = self.get(id).map(children).unwrap_or(&[]);
        ids.iter().map(move |&child| (child, &self.nodes[child.0]))
    }
}
