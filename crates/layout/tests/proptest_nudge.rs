//! Property-based tests for nudge placement geometry
//!
//! Validates the layout engine invariants:
//! - Overlap is symmetric and means strictly positive shared area
//! - Encompassing rectangles are minimal bounds
//! - Direction choice is deterministic and first-free wins

use proptest::prelude::*;
use stashtrack_core::{Direction, Rect};
use stashtrack_layout::{choose_direction, encompassing, is_free, rectangle_for, DEFAULT_PRIORITY};

fn arb_rect() -> impl Strategy<Value = Rect> {
    (-60i32..60, -60i32..60, 1i32..40, 1i32..40).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Shared area computed from edges, independent of `Rect::intersects`.
fn overlap_area(a: Rect, b: Rect) -> i64 {
    let w = (a.right().min(b.right()) - a.left().max(b.left())).max(0) as i64;
    let h = (a.bottom().min(b.bottom()) - a.top().max(b.top())).max(0) as i64;
    w * h
}

proptest! {
    /// Property: two rectangles intersect exactly when they share strictly
    /// positive area, so edge-touching neighbours never count as overlap.
    #[test]
    fn intersection_matches_positive_area(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersects(&b), overlap_area(a, b) > 0);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    /// Property: `is_free` with a single obstacle in unbounded-enough
    /// bounds is the negation of positive-area overlap.
    #[test]
    fn free_means_no_positive_overlap(candidate in arb_rect(), obstacle in arb_rect()) {
        let bounds = Rect::new(-200, -200, 400, 400);
        prop_assert_eq!(
            is_free(candidate, &[obstacle], bounds),
            overlap_area(candidate, obstacle) == 0
        );
    }

    /// Property: the encompassing rectangle contains every input, and each
    /// of its four edges is contributed by some input, so no smaller
    /// rectangle contains them all.
    #[test]
    fn encompassing_is_minimal(rects in prop::collection::vec(arb_rect(), 1..8)) {
        let bound = encompassing(&rects).unwrap();
        for r in &rects {
            prop_assert!(bound.contains(r));
        }
        prop_assert!(rects.iter().any(|r| r.left() == bound.left()));
        prop_assert!(rects.iter().any(|r| r.top() == bound.top()));
        prop_assert!(rects.iter().any(|r| r.right() == bound.right()));
        prop_assert!(rects.iter().any(|r| r.bottom() == bound.bottom()));
    }

    /// Property: direction choice is a pure function of its inputs, and
    /// when any priority direction fits, the chosen one is the first that
    /// fits in priority order.
    #[test]
    fn direction_choice_is_deterministic_first_free(
        anchor in arb_rect(),
        obstacles in prop::collection::vec(arb_rect(), 0..5),
        count in 1i32..4,
        spacing in 1i32..8,
    ) {
        let bounds = Rect::new(-200, -200, 400, 400);
        let chosen = choose_direction(anchor, &obstacles, bounds, count, spacing, &DEFAULT_PRIORITY);
        let again = choose_direction(anchor, &obstacles, bounds, count, spacing, &DEFAULT_PRIORITY);
        prop_assert_eq!(chosen, again);

        let first_free = DEFAULT_PRIORITY.iter().copied().find(|&dir| {
            rectangle_for(anchor, dir, count, spacing)
                .map(|rect| is_free(rect, &obstacles, bounds))
                .unwrap_or(false)
        });
        match first_free {
            Some(dir) => prop_assert_eq!(chosen, dir),
            None => prop_assert_eq!(chosen, DEFAULT_PRIORITY[0]),
        }
    }

    /// Property: a secondary row rectangle always contains its anchor and
    /// grows only along the chosen axis.
    #[test]
    fn row_rectangle_contains_anchor(
        anchor in arb_rect(),
        count in 1i32..4,
        spacing in 1i32..8,
    ) {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let rect = rectangle_for(anchor, dir, count, spacing).unwrap();
            prop_assert!(rect.contains(&anchor));
            if dir.is_horizontal() {
                prop_assert_eq!(rect.height, anchor.height);
            } else {
                prop_assert_eq!(rect.width, anchor.width);
            }
        }
    }
}
