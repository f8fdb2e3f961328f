//! Descents along the rightmost branch of an outline.
//!
//! Headings arrive in document order, so every insertion happens somewhere on
//! the "last child" chain starting at the root. Each helper walks that chain
//! iteratively and returns the node whose children list is the insertion point.

use crate::tree::{NodeId, Outline};

/// The owner of the deepest sibling list on the rightmost branch.
///
/// Follows last children from `from` until reaching a childless node and
/// returns that node's parent. Returns `from` itself when it has no children.
pub fn rightmost_deepest_siblings(outline: &Outline, from: NodeId) -> NodeId {
    let mut owner = from;
    let Some(mut current) = outline.last_child(from) else {
        return from;
    };
    while let Some(last) = outline.last_child(current) {
        owner = current;
        current = last;
    }
    owner
}

/// The deepest node on the rightmost branch.
///
/// Its (empty) children list is where a deeper heading attaches.
pub fn rightmost_deepest_children(outline: &Outline, from: NodeId) -> NodeId {
    let mut current = from;
    while let Some(last) = outline.last_child(current) {
        current = last;
    }
    current
}

/// The owner of the sibling list holding the rightmost node at `level`.
///
/// Returns `None` when the rightmost branch ends before reaching that level.
pub fn ancestor_at_level(outline: &Outline, level: u8, from: NodeId) -> Option<NodeId> {
    let mut owner = from;
    let mut current = outline.last_child(from)?;
    while outline.node(current).level != level {
        owner = current;
        current = outline.last_child(current)?;
    }
    Some(owner)
}
