//! Keeps a rendered panel in step with the reader's scroll position.
//!
//! - [`resolve`]: picks the heading closest to the scroll offset
//! - [`state`]: the expand/collapse state machine driven by the active heading
//! - [`throttle`]: rate-limits scroll reactions

pub mod resolve;
pub mod state;
pub mod throttle;

pub use resolve::resolve_active;
pub use state::ExpandState;
pub use throttle::Throttle;
