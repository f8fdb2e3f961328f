use generatoc_types::LevelSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of one panel.
///
/// Deserializes from camelCase keys with every field optional:
///
/// ```
/// use generatoc_core::TocConfig;
/// let config: TocConfig =
///     serde_json::from_str(r##"{ "content": "#article", "heading": ["h2", "h3"] }"##).unwrap();
/// assert_eq!(config.selector, "#toc");
/// assert_eq!(config.heading.selector(), "h2,h3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TocConfig {
    /// Selector of the element whose headings are indexed.
    ///
    /// Defaults to `"body"`.
    pub content: String,

    /// Heading levels to include. Serialized as tags, e.g. `["h2", "h3"]`.
    ///
    /// Defaults to `h2` through `h5`.
    pub heading: LevelSet,

    /// Selector of the element the panel is drawn into.
    ///
    /// Defaults to `"#toc"`.
    pub selector: String,

    /// Keep the URL fragment in sync with the active heading, replacing the
    /// current history entry rather than pushing new ones.
    ///
    /// Defaults to `false`.
    pub scroll_history: bool,

    /// Minimum spacing between two active-heading resolutions, in milliseconds.
    ///
    /// Defaults to `500`.
    pub throttle_ms: u64,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            content: "body".to_string(),
            heading: LevelSet::default(),
            selector: "#toc".to_string(),
            scroll_history: false,
            throttle_ms: 500,
        }
    }
}

impl TocConfig {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_levels(mut self, heading: LevelSet) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_scroll_history(mut self, enabled: bool) -> Self {
        self.scroll_history = enabled;
        self
    }

    pub fn with_throttle(mut self, interval: Duration) -> Self {
        self.throttle_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}
