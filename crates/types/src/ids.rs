//! Newtype wrappers for structural handles.
//!
//! Containers in a rendered panel are addressed by `ContainerId`, leaves by the
//! heading's original index (a plain `usize`). Keeping the container handle a
//! distinct type stops the two from being mixed up at the renderer boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a container in a materialized panel tree.
///
/// Ids are assigned in pre-order, so the top-level container of the first
/// heading is always `ContainerId(0)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(usize);

impl ContainerId {
    /// Creates a new ContainerId from its pre-order position
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the pre-order position of this container
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ContainerId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}
