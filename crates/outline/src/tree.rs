//! Arena-backed outline tree.
//!
//! Nodes are owned by the [`Outline`] and refer to their children by [`NodeId`].
//! There are no parent links; ancestry is always recomputed top-down.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Handle of a node inside one [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One node of the outline.
///
/// A node is *concrete* when it stands for a real heading (it has a label) and
/// *synthetic* when it only bridges a skipped level. Synthetic nodes carry the
/// index of the heading that caused them, for bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Heading index; `None` only for the sentinel root.
    pub index: Option<usize>,
    pub level: u8,
    pub label: Option<String>,
    children: Vec<NodeId>,
}

impl OutlineNode {
    pub fn concrete(index: usize, level: u8, label: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            level,
            label: Some(label.into()),
            children: Vec::new(),
        }
    }

    pub fn synthetic(index: usize, level: u8) -> Self {
        Self {
            index: Some(index),
            level,
            label: None,
            children: Vec::new(),
        }
    }

    fn root(level: u8) -> Self {
        Self {
            index: None,
            level,
            label: None,
            children: Vec::new(),
        }
    }

    pub fn is_concrete(&self) -> bool {
        self.label.is_some()
    }

    pub fn is_synthetic(&self) -> bool {
        self.label.is_none() && self.index.is_some()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A nested outline rooted at a sentinel node.
///
/// The root carries no index and no label. Its level is the *base level*: the
/// level just above the shallowest headings, so those become its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

impl Outline {
    pub fn new(base_level: u8) -> Self {
        Self {
            nodes: vec![OutlineNode::root(base_level)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn base_level(&self) -> u8 {
        self.nodes[0].level
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this outline.
    pub fn node(&self, id: NodeId) -> &OutlineNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&OutlineNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Appends `node` as the last child of `parent` and returns its id.
    pub fn append(&mut self, parent: NodeId, node: OutlineNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of nodes below the root, synthetic ones included.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// All nodes below the root in document order, with their depth (1 = root child).
    pub fn preorder(&self) -> Preorder<'_> {
        let stack = self
            .children(self.root())
            .iter()
            .rev()
            .map(|&id| (1, id))
            .collect();
        Preorder {
            outline: self,
            stack,
        }
    }

    /// Indices of the concrete nodes in document order.
    pub fn concrete_indices(&self) -> Vec<usize> {
        self.preorder()
            .map(|(_, id)| self.node(id))
            .filter(|node| node.is_concrete())
            .filter_map(|node| node.index)
            .collect()
    }

    /// Locates the concrete node of heading `index`.
    pub fn find(&self, index: usize) -> Option<NodeId> {
        self.preorder().map(|(_, id)| id).find(|&id| {
            let node = self.node(id);
            node.is_concrete() && node.index == Some(index)
        })
    }
}

/// Pre-order iterator over an [`Outline`], see [`Outline::preorder`].
pub struct Preorder<'a> {
    outline: &'a Outline,
    stack: Vec<(usize, NodeId)>,
}

impl Iterator for Preorder<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        self.stack.extend(
            self.outline
                .children(id)
                .iter()
                .rev()
                .map(|&child| (depth + 1, child)),
        );
        Some((depth, id))
    }
}

struct NodeView<'a> {
    outline: &'a Outline,
    id: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.outline.node(self.id);
        let children: Vec<NodeView<'_>> = node
            .children
            .iter()
            .map(|&id| NodeView {
                outline: self.outline,
                id,
            })
            .collect();

        let mut state = serializer.serialize_struct("OutlineNode", 4)?;
        state.serialize_field("index", &node.index)?;
        state.serialize_field("level", &node.level)?;
        state.serialize_field("label", &node.label)?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

/// Serializes as the nested tree, starting at the root.
impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView {
            outline: self,
            id: self.root(),
        }
        .serialize(serializer)
    }
}
