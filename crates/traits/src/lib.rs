//! Platform abstraction traits for generatoc.
//!
//! The outline core never touches a document, a clock or a screen directly.
//! Everything it needs from the outside world is expressed here:
//!
//! - [`Host`]: heading discovery, scroll position, navigation and history
//! - [`PanelRenderer`]: creates the visual panel and applies [`PanelCommand`]s
//! - [`TimerScheduler`] / [`FrameScheduler`]: deferred callbacks
//! - [`Binding`]: a scoped event-listener registration released on drop
//!
//! [`ManualScheduler`] is an in-memory scheduler driven by explicit time
//! advancement, always available for hosts without a real event loop.
//!
//! [`PanelCommand`]: generatoc_types::PanelCommand

pub mod binding;
pub mod host;
pub mod scheduler;

pub use binding::Binding;
pub use host::{AnchorPosition, HeadingMarker, Host, HostError, PanelRenderer, RenderError};
pub use scheduler::{FrameId, FrameScheduler, ManualScheduler, TimerId, TimerScheduler};
