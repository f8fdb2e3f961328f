//! # generatoc
//!
//! Builds a table of contents from the flat heading sequence of a document and
//! keeps a rendered navigation panel in step with the reader's scroll position.
//!
//! The work is split across the workspace crates, all re-exported here:
//!
//! - [`types`]: heading records, levels, panel commands
//! - [`traits`]: the host, renderer and scheduler seams
//! - [`outline`]: outline construction and materialization
//! - [`spy`]: active-heading resolution, expand/collapse state, throttling
//! - [`core`]: configuration, errors, the live [`Panel`] and [`TocSession`]
//!
//! [`report`] backs the `generatoc` command-line tool.
//!
//! ```
//! use generatoc::{HeadingRecord, build, materialize};
//!
//! let outline = build(&HeadingRecord::from_levels(&[2, 4, 2]));
//! let panel = materialize(&outline);
//! assert_eq!(panel.leaf_count(), 3);
//! // the skipped h3 becomes a leafless container
//! assert_eq!(panel.container_count(), 4);
//! ```

pub use generatoc_core as core;
pub use generatoc_outline as outline;
pub use generatoc_spy as spy;
pub use generatoc_traits as traits;
pub use generatoc_types as types;

pub mod report;

pub use generatoc_core::{Panel, TocConfig, TocError, TocSession, heading_records};
pub use generatoc_outline::{Outline, OutlineBuilder, PanelTree, build, materialize};
pub use generatoc_spy::{ExpandState, Throttle, resolve_active};
pub use generatoc_traits::{Binding, Host, HeadingMarker, ManualScheduler, PanelRenderer};
pub use generatoc_types::{ContainerId, HeadingRecord, LevelError, LevelSet, PanelCommand, parse_level};
