//! Single-pass outline construction.
//!
//! Each heading is placed by comparing its level `L` with the previous
//! heading's level `P` (the base level for the first heading):
//!
//! - `L == P`: new sibling in the deepest sibling list of the rightmost branch.
//! - `L > P`: attached under the deepest node of the rightmost branch, through
//!   `L - P - 1` synthetic nodes so each step goes down exactly one level.
//! - `L < P`: new sibling of the rightmost node already at level `L`.
//!
//! No level sequence is rejected. If a shallower heading finds no node at its
//! level on the rightmost branch (only possible when the base level is not
//! below every heading), it is attached to the root.

use crate::navigate::{ancestor_at_level, rightmost_deepest_children, rightmost_deepest_siblings};
use crate::tree::{NodeId, Outline, OutlineNode};
use generatoc_types::HeadingRecord;
use std::cmp::Ordering;

/// Incremental outline builder. Feed headings in document order with [`push`](Self::push).
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    outline: Outline,
    previous: Option<u8>,
}

impl OutlineBuilder {
    /// Starts an outline whose root sits at `base_level`.
    pub fn new(base_level: u8) -> Self {
        Self {
            outline: Outline::new(base_level),
            previous: None,
        }
    }

    /// Places one heading and returns the id of its concrete node.
    pub fn push(&mut self, record: &HeadingRecord) -> NodeId {
        let level = record.level;
        let previous = self.previous.unwrap_or_else(|| self.outline.base_level());
        let root = self.outline.root();

        let id = match level.cmp(&previous) {
            Ordering::Equal => {
                let parent = rightmost_deepest_siblings(&self.outline, root);
                self.append_concrete(parent, record)
            }
            Ordering::Greater => {
                let parent = rightmost_deepest_children(&self.outline, root);
                self.append_chain(parent, record, level - previous)
            }
            Ordering::Less => {
                let parent = ancestor_at_level(&self.outline, level, root).unwrap_or_else(|| {
                    log::debug!(
                        "No level {} heading before heading {}; attaching it to the root",
                        level,
                        record.index
                    );
                    root
                });
                self.append_concrete(parent, record)
            }
        };

        self.previous = Some(level);
        id
    }

    pub fn finish(self) -> Outline {
        self.outline
    }

    fn append_concrete(&mut self, parent: NodeId, record: &HeadingRecord) -> NodeId {
        self.outline.append(
            parent,
            OutlineNode::concrete(record.index, record.level, record.label.clone()),
        )
    }

    /// Appends `gap - 1` synthetic nodes followed by the concrete node.
    fn append_chain(&mut self, parent: NodeId, record: &HeadingRecord, gap: u8) -> NodeId {
        let mut parent = parent;
        for depth in (1..gap).rev() {
            parent = self.outline.append(
                parent,
                OutlineNode::synthetic(record.index, record.level - depth),
            );
        }
        self.append_concrete(parent, record)
    }
}

/// Builds the outline for a whole heading sequence.
///
/// The root is placed one level above the shallowest heading, so the
/// shallowest headings become top-level entries whatever their tag.
pub fn build(records: &[HeadingRecord]) -> Outline {
    let base = records
        .iter()
        .map(|r| r.level)
        .min()
        .map_or(0, |level| level.saturating_sub(1));

    let mut builder = OutlineBuilder::new(base);
    for record in records {
        builder.push(record);
    }

    let outline = builder.finish();
    log::debug!(
        "Built outline: {} headings, {} nodes, base level {}",
        records.len(),
        outline.len(),
        base
    );
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Compact shape: `label` for concrete nodes, `_L` for synthetic ones, children in brackets.
    fn shape(outline: &Outline) -> String {
        fn walk(outline: &Outline, id: NodeId, out: &mut Vec<String>) {
            for &child in outline.children(id) {
                let node = outline.node(child);
                let mut s = match &node.label {
                    Some(label) => label.clone(),
                    None => format!("_{}", node.level),
                };
                if !node.children().is_empty() {
                    let mut inner = Vec::new();
                    walk(outline, child, &mut inner);
                    s.push_str(&format!("[{}]", inner.join(" ")));
                }
                out.push(s);
            }
        }
        let mut out = Vec::new();
        walk(outline, outline.root(), &mut out);
        out.join(" ")
    }

    fn labelled(levels: &[u8]) -> Vec<HeadingRecord> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &l)| HeadingRecord::new(i, l, i.to_string()))
            .collect()
    }

    fn assert_steps_of_one(outline: &Outline) {
        for (_, id) in outline.preorder() {
            let node = outline.node(id);
            for &child in node.children() {
                assert_eq!(outline.node(child).level, node.level + 1);
            }
        }
        for &child in outline.children(outline.root()) {
            assert_eq!(outline.node(child).level, outline.base_level() + 1);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_root() {
        let outline = build(&[]);
        assert!(outline.is_empty());
        assert_eq!(outline.base_level(), 0);
    }

    #[test]
    fn test_flat_sequence_are_root_children() {
        let outline = build(&labelled(&[2, 2, 2]));
        assert_eq!(shape(&outline), "0 1 2");
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_skipped_level_gets_synthetic_bridge() {
        let outline = build(&labelled(&[2, 4]));
        assert_eq!(shape(&outline), "0[_3[1]]");

        let bridge = outline.children(outline.children(outline.root())[0])[0];
        let node = outline.node(bridge);
        assert!(node.is_synthetic());
        assert_eq!(node.index, Some(1));
        assert_eq!(node.children().len(), 1);
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_up_down_returns_to_root() {
        let outline = build(&labelled(&[2, 3, 2]));
        assert_eq!(shape(&outline), "0[1] 2");
    }

    #[test]
    fn test_shallower_heading_joins_matching_level() {
        let outline = build(&labelled(&[2, 3, 4, 3, 4, 2]));
        assert_eq!(shape(&outline), "0[1[2] 3[4]] 5");
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_drop_after_skip_lands_next_to_synthetic() {
        // The level-3 heading finds the synthetic level-3 node on the rightmost branch.
        let outline = build(&labelled(&[2, 4, 3]));
        assert_eq!(shape(&outline), "0[_3[1] 2]");
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_first_heading_deeper_than_shallowest() {
        let outline = build(&labelled(&[3, 2, 3]));
        assert_eq!(outline.base_level(), 1);
        assert_eq!(shape(&outline), "_2[0] 1[2]");
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_large_gap_builds_full_chain() {
        let outline = build(&labelled(&[1, 6]));
        assert_eq!(shape(&outline), "0[_2[_3[_4[_5[1]]]]]");
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_every_index_appears_once_in_order() {
        let levels = [2, 5, 3, 3, 2, 4, 4, 3, 5, 2];
        let outline = build(&labelled(&levels));
        assert_eq!(outline.concrete_indices(), (0..levels.len()).collect::<Vec<_>>());
        assert_steps_of_one(&outline);
    }

    #[test]
    fn test_same_level_after_skip_shares_synthetic_parent() {
        // A synthetic node keeps collecting siblings of the heading it bridged to.
        let outline = build(&labelled(&[2, 4, 4]));
        assert_eq!(shape(&outline), "0[_3[1 2]]");
        assert_steps_of_one(&outline);

        let outline = build(&labelled(&[1, 1, 1, 1, 1, 3, 3]));
        assert_eq!(shape(&outline), "0 1 2 3 4[_2[5 6]]");
        assert_steps_of_one(&outline);
    }

    proptest! {
        #[test]
        fn test_any_level_sequence_builds_consistent_outline(
            levels in prop::collection::vec(1u8..=6, 0..40)
        ) {
            let outline = build(&labelled(&levels));
            assert_steps_of_one(&outline);
            prop_assert_eq!(outline.concrete_indices(), (0..levels.len()).collect::<Vec<_>>());
            prop_assert_eq!(crate::materialize(&outline).leaf_count(), levels.len());
        }
    }

    #[test]
    fn test_explicit_base_level_zero() {
        let mut builder = OutlineBuilder::new(0);
        for record in labelled(&[2, 2]) {
            builder.push(&record);
        }
        let outline = builder.finish();
        assert_eq!(shape(&outline), "_1[0 1]");
    }

    #[test]
    fn test_unresolved_level_attaches_to_root() {
        // Base 2 means no level-2 node can exist on the rightmost branch.
        let mut builder = OutlineBuilder::new(2);
        for record in labelled(&[3, 2]) {
            builder.push(&record);
        }
        let outline = builder.finish();
        assert_eq!(shape(&outline), "0 1");
    }

    #[test]
    fn test_rebuild_is_structurally_equal() {
        let records = labelled(&[2, 4, 3, 2, 5]);
        assert_eq!(build(&records), build(&records));
    }
}
