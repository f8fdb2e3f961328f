pub mod document;
pub mod ids;
pub mod level;

pub use document::{HeadingRecord, PanelCommand};
pub use ids::ContainerId;
pub use level::{LevelError, LevelSet, parse_level};
