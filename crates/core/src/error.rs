//! Error types for building and running a panel.

use generatoc_traits::{HostError, RenderError};
use generatoc_types::{LevelError, LevelSet};
use thiserror::Error;

/// The main error enum for panel operations.
///
/// None of these escape the lenient boundary ([`TocSession`](crate::TocSession)):
/// there they are logged and the call becomes a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TocError {
    #[error("Content root '{0}' not found")]
    ContentNotFound(String),

    #[error("Toc element '{0}' not found")]
    ContainerNotFound(String),

    #[error("No {levels} headings under '{content}'")]
    NoHeadings { content: String, levels: LevelSet },

    #[error("Malformed heading: {0}")]
    Level(#[from] LevelError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

impl TocError {
    /// Whether this error just means "nothing to show" rather than a misconfiguration.
    pub fn is_empty_document(&self) -> bool {
        matches!(self, TocError::NoHeadings { .. })
    }
}
