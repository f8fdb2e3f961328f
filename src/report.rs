//! Outlines for heading lists stored as JSON.
//!
//! Input is an array of `{ "tag": "h2", "label": "Intro" }` objects in
//! document order.

use generatoc_outline::Outline;
use generatoc_types::{HeadingRecord, LevelError, LevelSet, parse_level};
use serde::Deserialize;
use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed heading: {0}")]
    Level(#[from] LevelError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadingInput {
    pub tag: String,
    pub label: String,
}

/// Parses the heading list, keeping only tags in `levels` (all tags when `None`).
///
/// Indices are assigned after filtering, so they stay contiguous.
pub fn parse_headings(json: &str, levels: Option<&LevelSet>) -> Result<Vec<HeadingRecord>, ReportError> {
    let inputs: Vec<HeadingInput> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(inputs.len());
    for input in inputs {
        let level = parse_level(input.tag.trim())?;
        if levels.is_some_and(|set| !set.contains(level)) {
            continue;
        }
        records.push(HeadingRecord::new(records.len(), level, input.label));
    }
    Ok(records)
}

/// Indented text rendering, one node per line. Synthetic nodes show as `(hN)`.
///
/// ```
/// use generatoc::report::render_text;
/// use generatoc::{HeadingRecord, build};
///
/// let outline = build(&[HeadingRecord::new(0, 2, "Intro"), HeadingRecord::new(1, 4, "Deep")]);
/// assert_eq!(render_text(&outline), "- Intro [0]\n  - (h3)\n    - Deep [1]\n");
/// ```
pub fn render_text(outline: &Outline) -> String {
    let mut out = String::new();
    for (depth, id) in outline.preorder() {
        let node = outline.node(id);
        let indent = "  ".repeat(depth - 1);
        let _ = match (&node.label, node.index) {
            (Some(label), Some(index)) => writeln!(out, "{indent}- {label} [{index}]"),
            _ => writeln!(out, "{indent}- (h{})", node.level),
        };
    }
    out
}

pub fn render_json(outline: &Outline) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(outline)?)
}
