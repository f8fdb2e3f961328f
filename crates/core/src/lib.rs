//! # generatoc-core
//!
//! Platform-agnostic table-of-contents panel.
//!
//! Given a [`Host`](generatoc_traits::Host) that can find headings, draw a
//! panel and report the scroll position, this crate:
//!
//! - builds the outline from the heading sequence (`generatoc-outline`)
//! - renders it through the host's [`PanelRenderer`](generatoc_traits::PanelRenderer)
//! - keeps the highlighted entry in step with scrolling (`generatoc-spy`)
//! - releases every listener, timer and frame on teardown
//!
//! [`Panel`] is the strict API returning [`TocError`]s; [`TocSession`] wraps it
//! in the lenient init / destroy / refresh surface that never fails.

// Re-export foundation crates
pub use generatoc_traits as traits;
pub use generatoc_types as types;

// Re-export algorithm crates
pub use generatoc_outline as outline;
pub use generatoc_spy as spy;

pub mod config;
pub mod error;
pub mod panel;
pub mod session;

pub use config::TocConfig;
pub use error::TocError;
pub use panel::{Panel, heading_records};
pub use session::TocSession;
