//! Expand/collapse state of a rendered panel.
//!
//! Each container is either expanded (its child containers are shown) or
//! collapsed. At most one leaf is highlighted. Every transition starts from a
//! full reset, so the resulting state depends only on the target, never on
//! the path that led there.

use generatoc_outline::{ContainerEntry, PanelTree};
use generatoc_types::{ContainerId, PanelCommand};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: BTreeSet<ContainerId>,
    highlighted: Option<usize>,
}

impl ExpandState {
    /// All containers collapsed, nothing highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands that bring a freshly rendered panel into the initial state.
    pub fn initial_commands(tree: &PanelTree) -> Vec<PanelCommand> {
        tree.container_ids().map(PanelCommand::Collapse).collect()
    }

    pub fn is_expanded(&self, id: ContainerId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.expanded.iter().copied()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Makes heading `index` the active one.
    ///
    /// Collapses everything, expands the containers from the top level down to
    /// the leaf's own container, and moves the highlight to the leaf. Returns no
    /// commands and leaves the state untouched if the panel has no such leaf.
    pub fn activate(&mut self, tree: &PanelTree, index: usize) -> Vec<PanelCommand> {
        let Some(path) = tree.leaf_path(index) else {
            log::warn!("No panel leaf for heading {}", index);
            return Vec::new();
        };

        let mut commands = self.reset(tree);
        if let Some(previous) = self.highlighted.take() {
            commands.push(PanelCommand::Unhighlight(previous));
        }
        self.expand_path(&path, &mut commands);
        self.highlighted = Some(index);
        commands.push(PanelCommand::Highlight(index));
        commands
    }

    /// Opens the panel down to container `id`, keeping the current highlight.
    pub fn reveal(&mut self, tree: &PanelTree, id: ContainerId) -> Vec<PanelCommand> {
        let Some(path) = tree.path_to(id) else {
            log::warn!("No panel {}", id);
            return Vec::new();
        };

        let mut commands = self.reset(tree);
        self.expand_path(&path, &mut commands);
        commands
    }

    fn reset(&mut self, tree: &PanelTree) -> Vec<PanelCommand> {
        self.expanded.clear();
        Self::initial_commands(tree)
    }

    /// Expands every container on `path`, then the leafless containers directly
    /// below its end so the next real entry is not hidden behind a bridge.
    fn expand_path(&mut self, path: &[&ContainerEntry], commands: &mut Vec<PanelCommand>) {
        for entry in path {
            self.expand(entry.id, commands);
        }
        let Some(target) = path.last() else {
            return;
        };
        let mut bridges: Vec<&ContainerEntry> =
            target.children.iter().filter(|c| c.leaf.is_none()).collect();
        while let Some(bridge) = bridges.pop() {
            self.expand(bridge.id, commands);
            bridges.extend(bridge.children.iter().filter(|c| c.leaf.is_none()));
        }
    }

    fn expand(&mut self, id: ContainerId, commands: &mut Vec<PanelCommand>) {
        if self.expanded.insert(id) {
            commands.push(PanelCommand::Expand(id));
        }
    }
}
