//! # generatoc-outline
//!
//! Turns a flat, ordered sequence of headings into a nested outline.
//!
//! Real documents skip levels (an `h2` followed directly by an `h4`). The
//! [`builder`] repairs this in a single left-to-right pass by inserting
//! synthetic nodes, so that every parent→child edge in the finished
//! [`Outline`] steps exactly one level down.
//!
//! - [`tree`]: the arena-backed outline and its nodes
//! - [`navigate`]: the rightmost-branch descents the builder uses to find insertion points
//! - [`builder`]: the construction pass
//! - [`materialize`]: converts an outline into the container/leaf tree a renderer draws

pub mod builder;
pub mod materialize;
pub mod navigate;
pub mod tree;

pub use builder::{OutlineBuilder, build};
pub use materialize::{ContainerEntry, LeafEntry, PanelTree, materialize};
pub use tree::{NodeId, Outline, OutlineNode};
