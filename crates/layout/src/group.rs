//! Floating button group placement and hover expansion.
//!
//! The overlay button is a primary square with a row of secondary squares
//! that fan out in whichever direction the nudge engine finds free. The
//! group is pure geometry here; what the buttons do is the UI layer's
//! business.

use crate::nudge::{self, DEFAULT_PRIORITY};
use stashtrack_core::{Direction, Rect};

/// Edge length of the primary and secondary buttons, in pixels.
pub const BUTTON_SIZE: i32 = 9;

/// Gap between consecutive buttons in the secondary row.
pub const SECONDARY_SPACING: i32 = 5;

/// How far the hover zone extends past the expanded group, so the pointer
/// can cross the gaps between buttons without collapsing it.
pub const HOVER_INFLATE: i32 = 5;

/// Resolved geometry for one button group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlacement {
    /// Direction the secondary row grew in.
    pub direction: Direction,
    /// Primary button rectangle.
    pub primary: Rect,
    /// Secondary button rectangles, in descriptor order.
    pub secondaries: Vec<Rect>,
    /// Hover zone covering the whole expanded group.
    pub hover_area: Rect,
}

/// Place `secondary_count` buttons next to `primary`, avoiding `obstacles`
/// and staying inside `bounds` when possible.
pub fn place_group(
    primary: Rect,
    secondary_count: usize,
    obstacles: &[Rect],
    bounds: Rect,
) -> GroupPlacement {
    if secondary_count == 0 {
        return GroupPlacement {
            direction: DEFAULT_PRIORITY[0],
            primary,
            secondaries: Vec::new(),
            hover_area: primary.inflate(HOVER_INFLATE),
        };
    }

    let count = secondary_count as i32;
    let direction = nudge::choose_direction(
        primary,
        obstacles,
        bounds,
        count,
        SECONDARY_SPACING,
        &DEFAULT_PRIORITY,
    );

    let secondaries: Vec<Rect> = (1..=count)
        .map(|i| nudge::button_slot(primary, direction, SECONDARY_SPACING, i))
        .collect();

    let mut group = primary;
    for rect in &secondaries {
        group = group.union(rect);
    }

    GroupPlacement {
        direction,
        primary,
        secondaries,
        hover_area: group.inflate(HOVER_INFLATE),
    }
}

/// Expansion state for a button group's secondary row.
///
/// The inflated hover zone only holds the group open once it is already
/// expanded; collapsing requires leaving the zone, expanding requires
/// actually touching the primary button.
#[derive(Debug, Default)]
pub struct GroupHover {
    expanded: bool,
}

impl GroupHover {
    /// Update from this frame's pointer location. Returns whether the
    /// secondary buttons should be visible.
    pub fn update(&mut self, placement: &GroupPlacement, pointer: (i32, i32), dragging: bool) -> bool {
        let (px, py) = pointer;
        let show = !dragging
            && (placement.primary.contains_point(px, py)
                || (self.expanded && placement.hover_area.contains_point(px, py)));
        self.expanded = show;
        show
    }

    /// Whether the group is currently expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
