//! Presentation tree for renderers.
//!
//! Every outline node becomes one container. A concrete node's container
//! starts with the node's leaf (label + heading index) followed by the child
//! containers; a synthetic node's container only holds child containers.
//! Container ids are assigned in pre-order.

use crate::tree::{NodeId, Outline};
use generatoc_types::ContainerId;
use serde::Serialize;
use std::convert::Infallible;

/// A labelled entry bound to one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafEntry {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEntry {
    pub id: ContainerId,
    pub level: u8,
    pub leaf: Option<LeafEntry>,
    pub children: Vec<ContainerEntry>,
}

/// The materialized panel: top-level containers in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelTree {
    pub containers: Vec<ContainerEntry>,
    container_count: usize,
    leaf_count: usize,
}

/// Materializes an outline. Pure: the outline is not modified.
pub fn materialize(outline: &Outline) -> PanelTree {
    let mut next_id = 0;
    let mut leaf_count = 0;
    let containers = outline
        .children(outline.root())
        .iter()
        .map(|&id| materialize_node(outline, id, &mut next_id, &mut leaf_count))
        .collect();

    PanelTree {
        containers,
        container_count: next_id,
        leaf_count,
    }
}

fn materialize_node(
    outline: &Outline,
    id: NodeId,
    next_id: &mut usize,
    leaf_count: &mut usize,
) -> ContainerEntry {
    let node = outline.node(id);
    let container = ContainerId::new(*next_id);
    *next_id += 1;

    let leaf = match (node.index, &node.label) {
        (Some(index), Some(label)) => {
            *leaf_count += 1;
            Some(LeafEntry {
                index,
                label: label.clone(),
            })
        }
        _ => None,
    };

    let children = node
        .children()
        .iter()
        .map(|&child| materialize_node(outline, child, next_id, leaf_count))
        .collect();

    ContainerEntry {
        id: container,
        level: node.level,
        leaf,
        children,
    }
}

impl PanelTree {
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn container_count(&self) -> usize {
        self.container_count
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Every container id, in pre-order.
    pub fn container_ids(&self) -> impl Iterator<Item = ContainerId> + use<> {
        (0..self.container_count).map(ContainerId::new)
    }

    /// Leaves in document order.
    pub fn leaves(&self) -> Vec<&LeafEntry> {
        let mut leaves = Vec::with_capacity(self.leaf_count);
        self.for_each(|entry, _| {
            if let Some(leaf) = &entry.leaf {
                leaves.push(leaf);
            }
        });
        leaves
    }

    pub fn container(&self, id: ContainerId) -> Option<&ContainerEntry> {
        self.path_to(id).and_then(|path| path.last().copied())
    }

    /// Containers from the top level down to (and including) `id`.
    pub fn path_to(&self, id: ContainerId) -> Option<Vec<&ContainerEntry>> {
        self.find_path(|entry| entry.id == id)
    }

    /// Containers from the top level down to the one holding the leaf of heading `index`.
    pub fn leaf_path(&self, index: usize) -> Option<Vec<&ContainerEntry>> {
        self.find_path(|entry| entry.leaf.as_ref().is_some_and(|leaf| leaf.index == index))
    }

    /// Ids of [`leaf_path`](Self::leaf_path).
    pub fn container_chain(&self, index: usize) -> Option<Vec<ContainerId>> {
        self.leaf_path(index)
            .map(|path| path.into_iter().map(|entry| entry.id).collect())
    }

    /// Visits every container in pre-order together with its parent's id.
    pub fn for_each<'a>(&'a self, mut visit: impl FnMut(&'a ContainerEntry, Option<ContainerId>)) {
        let _ = self.try_for_each(|entry, parent| {
            visit(entry, parent);
            Ok::<(), Infallible>(())
        });
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error.
    pub fn try_for_each<'a, E>(
        &'a self,
        mut visit: impl FnMut(&'a ContainerEntry, Option<ContainerId>) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut stack: Vec<(&ContainerEntry, Option<ContainerId>)> =
            self.containers.iter().rev().map(|c| (c, None)).collect();
        while let Some((entry, parent)) = stack.pop() {
            visit(entry, parent)?;
            stack.extend(entry.children.iter().rev().map(|c| (c, Some(entry.id))));
        }
        Ok(())
    }

    fn find_path(&self, matches: impl Fn(&ContainerEntry) -> bool) -> Option<Vec<&ContainerEntry>> {
        fn search<'a>(
            entries: &'a [ContainerEntry],
            matches: &dyn Fn(&ContainerEntry) -> bool,
            path: &mut Vec<&'a ContainerEntry>,
        ) -> bool {
            for entry in entries {
                path.push(entry);
                if matches(entry) || search(&entry.children, matches, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        search(&self.containers, &matches, &mut path).then_some(path)
    }
}
