//! The host environment: documents, panels and the reader's viewport.

use crate::binding::Binding;
use crate::scheduler::{FrameScheduler, TimerScheduler};
use generatoc_types::{ContainerId, LevelSet, PanelCommand};
use thiserror::Error;

/// Error reported by a [`PanelRenderer`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Failed to create {what}: {message}")]
    Create { what: &'static str, message: String },

    #[error("Unknown container: {0}")]
    UnknownContainer(ContainerId),

    #[error("Unknown leaf for heading {0}")]
    UnknownLeaf(usize),

    #[error("Failed to bind '{event}' listener: {message}")]
    Bind { event: &'static str, message: String },
}

/// Error reported by a [`Host`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Failed to listen for '{event}': {message}")]
    Listen { event: &'static str, message: String },

    #[error("History update failed: {0}")]
    History(String),

    #[error("Host error: {0}")]
    Other(String),
}

/// Anything that can report a vertical page offset.
///
/// For headings this is the scroll-spy anchor point: by convention the top of the
/// first content block after the heading, or the heading itself when it has none.
pub trait AnchorPosition {
    fn anchor_offset(&self) -> f64;
}

impl AnchorPosition for f64 {
    fn anchor_offset(&self) -> f64 {
        *self
    }
}

impl<T: AnchorPosition + ?Sized> AnchorPosition for &T {
    fn anchor_offset(&self) -> f64 {
        (**self).anchor_offset()
    }
}

/// A heading element located in the document.
pub trait HeadingMarker: AnchorPosition {
    /// The element's tag, e.g. `"h2"`.
    fn tag(&self) -> String;

    /// The heading's text.
    fn label(&self) -> String;
}

/// Draws the navigation panel and applies visual state to it.
///
/// Containers are created top-down: a container's parent always exists before
/// the container itself. `None` as parent means the panel's mount point.
pub trait PanelRenderer {
    fn create_container(
        &mut self,
        id: ContainerId,
        parent: Option<ContainerId>,
    ) -> Result<(), RenderError>;

    /// Creates the labelled leaf for heading `index` as the first entry of `container`.
    fn create_leaf(
        &mut self,
        container: ContainerId,
        index: usize,
        label: &str,
    ) -> Result<(), RenderError>;

    /// Invokes `handler` whenever the leaf of heading `index` is clicked.
    fn on_leaf_click(
        &mut self,
        index: usize,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError>;

    /// Invokes `handler` whenever the container itself is clicked.
    fn on_container_click(
        &mut self,
        id: ContainerId,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError>;

    fn apply(&mut self, command: PanelCommand);

    /// Removes everything this renderer created.
    fn clear(&mut self);
}

/// The environment a panel lives in.
///
/// A host is single-threaded and cooperative: callbacks handed to it run later on
/// the same thread, never concurrently with the caller.
pub trait Host: TimerScheduler + FrameScheduler + 'static {
    type Marker: HeadingMarker + 'static;
    type Renderer: PanelRenderer + 'static;

    /// Ordered heading markers under `content` whose level is in `levels`.
    ///
    /// Returns `None` when the content root itself cannot be found.
    fn find_headings(&self, content: &str, levels: &LevelSet) -> Option<Vec<Self::Marker>>;

    /// A renderer drawing into the container matched by `selector`, if it exists.
    fn mount(&self, selector: &str) -> Option<Self::Renderer>;

    /// Current scroll distance from the top of the document.
    fn scroll_offset(&self) -> f64;

    fn listen_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Binding, HostError>;

    /// Brings the heading into view.
    fn scroll_to(&self, marker: &Self::Marker);

    /// The current URL fragment without the leading `#`.
    fn fragment(&self) -> Option<String>;

    /// Replaces the current history entry's fragment.
    fn replace_fragment(&self, fragment: &str) -> Result<(), HostError>;
}
