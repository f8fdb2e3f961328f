use generatoc_traits::AnchorPosition;

/// Returns the index of the anchor closest to `scroll_offset`.
///
/// Distances are absolute. On a tie the earliest anchor wins. Returns `None`
/// when there are no anchors.
///
/// ```
/// use generatoc_spy::resolve_active;
/// assert_eq!(resolve_active(600.0, &[0.0, 500.0, 1200.0]), Some(1));
/// ```
pub fn resolve_active<A: AnchorPosition>(scroll_offset: f64, anchors: &[A]) -> Option<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, anchor) in anchors.iter().enumerate() {
        let distance = (anchor.anchor_offset() - scroll_offset).abs();
        let closer = match closest {
            None => true,
            Some((_, best)) => distance < best,
        };
        if closer {
            closest = Some((index, distance));
        }
    }
    closest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_minimum_distance() {
        assert_eq!(resolve_active(600.0, &[0.0, 500.0, 1200.0]), Some(1));
        assert_eq!(resolve_active(0.0, &[0.0, 500.0, 1200.0]), Some(0));
        assert_eq!(resolve_active(5000.0, &[0.0, 500.0, 1200.0]), Some(2));
    }

    #[test]
    fn test_tie_resolves_to_first() {
        assert_eq!(resolve_active(250.0, &[0.0, 500.0]), Some(0));
        assert_eq!(resolve_active(100.0, &[100.0, 100.0, 100.0]), Some(0));
    }

    #[test]
    fn test_unsorted_anchors_still_use_distance() {
        assert_eq!(resolve_active(950.0, &[0.0, 1000.0, 400.0, 900.0]), Some(1));
        assert_eq!(resolve_active(920.0, &[0.0, 1000.0, 400.0, 900.0]), Some(3));
    }

    #[test]
    fn test_no_anchors() {
        let anchors: [f64; 0] = [];
        assert_eq!(resolve_active(10.0, &anchors), None);
    }
}
