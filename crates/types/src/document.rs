use crate::ids::ContainerId;
use serde::{Deserialize, Serialize};

/// A heading found in the document, in document order.
///
/// `index` is the record's position in the heading sequence (0-based). It is
/// unique for the lifetime of one outline and is the key that ties outline
/// nodes, rendered leaves and scroll positions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingRecord {
    /// Position of the heading in the document's heading sequence.
    pub index: usize,
    /// Nesting level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The text content of the heading.
    pub label: String,
}

impl HeadingRecord {
    pub fn new(index: usize, level: u8, label: impl Into<String>) -> Self {
        Self {
            index,
            level,
            label: label.into(),
        }
    }

    /// Builds records for a plain level sequence, labelling each heading by its index.
    ///
    /// Handy for tests and benchmarks where only the shape matters.
    pub fn from_levels(levels: &[u8]) -> Vec<Self> {
        levels
            .iter()
            .enumerate()
            .map(|(index, &level)| Self::new(index, level, format!("Heading {index}")))
            .collect()
    }
}

/// A visual command emitted by the expand/collapse state machine.
///
/// The state machine never touches styling itself; a renderer applies these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "target", rename_all = "camelCase")]
pub enum PanelCommand {
    /// Reveal the child containers of a container.
    Expand(ContainerId),
    /// Hide the child containers of a container.
    Collapse(ContainerId),
    /// Mark the leaf of the heading with this index as the active one.
    Highlight(usize),
    /// Remove the active mark from the leaf of the heading with this index.
    Unhighlight(usize),
}
