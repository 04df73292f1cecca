//! Collision-avoiding placement for secondary button rows.
//!
//! Given the primary button's rectangle, the other UI regions on screen,
//! and the screen bounds, the engine picks the first direction (in
//! priority order) along which a row of secondary buttons fits without
//! covering anything or leaving the screen.

use crate::LayoutError;
use stashtrack_core::{Direction, Rect};
use tracing::trace;

/// Direction preference when nothing else decides: grow right, then left,
/// then down, then up.
pub const DEFAULT_PRIORITY: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Smallest rectangle encompassing `anchor` plus `count` anchor-sized
/// buttons stepped along `direction`, each `spacing` pixels past the
/// previous button's edge.
pub fn rectangle_for(
    anchor: Rect,
    direction: Direction,
    count: i32,
    spacing: i32,
) -> Result<Rect, LayoutError> {
    if count <= 0 {
        return Err(LayoutError::InvalidCount(count));
    }
    if spacing <= 0 {
        return Err(LayoutError::InvalidSpacing(spacing));
    }

    let stride = button_stride(anchor, direction, spacing);
    let mut result = anchor;
    for i in 1..=count {
        result = result.union(&anchor.step(direction, stride * i));
    }
    Ok(result)
}

/// Rectangle of the `index`-th secondary button (1-based) along `direction`.
pub fn button_slot(anchor: Rect, direction: Direction, spacing: i32, index: i32) -> Rect {
    anchor.step(direction, button_stride(anchor, direction, spacing) * index)
}

fn button_stride(anchor: Rect, direction: Direction, spacing: i32) -> i32 {
    let size = if direction.is_horizontal() {
        anchor.width
    } else {
        anchor.height
    };
    size + spacing
}

/// Whether `candidate` lies fully inside `bounds` and covers none of the
/// `obstacles`. Sharing an edge line with an obstacle does not count as
/// covering it.
pub fn is_free(candidate: Rect, obstacles: &[Rect], bounds: Rect) -> bool {
    bounds.contains(&candidate) && !obstacles.iter().any(|o| candidate.intersects(o))
}

/// First direction in `priority` whose secondary-button row is free, or
/// the first priority entry when none fit (overlap degrades visuals but
/// must not fail). An empty `priority` falls back to [`DEFAULT_PRIORITY`].
pub fn choose_direction(
    anchor: Rect,
    obstacles: &[Rect],
    bounds: Rect,
    count: i32,
    spacing: i32,
    priority: &[Direction],
) -> Direction {
    let priority = if priority.is_empty() {
        &DEFAULT_PRIORITY[..]
    } else {
        priority
    };

    for &dir in priority {
        match rectangle_for(anchor, dir, count, spacing) {
            Ok(rect) => {
                let free = is_free(rect, obstacles, bounds);
                trace!(?dir, ?rect, free, "probed secondary row placement");
                if free {
                    return dir;
                }
            }
            Err(err) => {
                trace!(?dir, %err, "skipped unplaceable secondary row");
            }
        }
    }
    priority[0]
}

/// Minimal rectangle containing every input rectangle.
pub fn encompassing(rects: &[Rect]) -> Result<Rect, LayoutError> {
    let (first, rest) = rects.split_first().ok_or(LayoutError::EmptyEncompass)?;
    Ok(rest.iter().fold(*first, |acc, r| acc.union(r)))
}
