//! Heading levels and the tag parser that produces them.
//!
//! A heading marker is identified by a tag of the form `h<number>` (case-insensitive),
//! e.g. `"H2"` or `"h4"`. The number is the nesting level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Error returned when a heading tag cannot be turned into a level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Heading tag '{0}' does not start with 'h'")]
    MissingPrefix(String),

    #[error("Heading tag '{0}' has no valid level number")]
    InvalidNumber(String),

    #[error("Heading tag '{0}' has level 0; levels start at 1")]
    Zero(String),
}

/// Parses the nesting level out of a heading tag.
///
/// Fails fast on anything that is not `h` followed by a positive number.
///
/// ```
/// use generatoc_types::parse_level;
/// assert_eq!(parse_level("H2"), Ok(2));
/// assert_eq!(parse_level("h5"), Ok(5));
/// assert!(parse_level("div").is_err());
/// ```
pub fn parse_level(tag: &str) -> Result<u8, LevelError> {
    let digits = tag
        .strip_prefix('h')
        .or_else(|| tag.strip_prefix('H'))
        .ok_or_else(|| LevelError::MissingPrefix(tag.to_string()))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LevelError::InvalidNumber(tag.to_string()));
    }

    match digits.parse::<u8>() {
        Ok(0) => Err(LevelError::Zero(tag.to_string())),
        Ok(level) => Ok(level),
        Err(_) => Err(LevelError::InvalidNumber(tag.to_string())),
    }
}

/// The set of heading levels an outline is built from.
///
/// Serialized as a list of tags (`["h2", "h3"]`) so configuration files and
/// JavaScript callers can use the same spelling as the document markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LevelSet(BTreeSet<u8>);

impl LevelSet {
    /// Creates a level set from plain level numbers. Zero is ignored.
    pub fn new(levels: impl IntoIterator<Item = u8>) -> Self {
        Self(levels.into_iter().filter(|l| *l > 0).collect())
    }

    /// Creates a level set from heading tags such as `"h2"`.
    pub fn from_tags<S: AsRef<str>>(tags: impl IntoIterator<Item = S>) -> Result<Self, LevelError> {
        let levels = tags
            .into_iter()
            .map(|t| parse_level(t.as_ref().trim()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self(levels))
    }

    pub fn contains(&self, level: u8) -> bool {
        self.0.contains(&level)
    }

    /// The shallowest configured level, if any.
    pub fn min(&self) -> Option<u8> {
        self.0.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Lowercase tag names joined with commas, usable as a CSS selector list.
    pub fn selector(&self) -> String {
        self.iter().map(|l| format!("h{l}")).collect::<Vec<_>>().join(",")
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new([2, 3, 4, 5])
    }
}

impl TryFrom<Vec<String>> for LevelSet {
    type Error = LevelError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_tags(tags)
    }
}

impl From<LevelSet> for Vec<String> {
    fn from(set: LevelSet) -> Self {
        set.iter().map(|l| format!("h{l}")).collect()
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}
