//! User-draggable button anchoring.
//!
//! A [`ButtonPosition`] records which parent edge the overlay button hangs
//! off and how far along it sits, so the button stays near "its" corner
//! when the host window (and with it the parent container) resizes. The
//! host persists the value and hands it back on the next screen open.

use serde::{Deserialize, Serialize};
use stashtrack_core::Rect;

/// Horizontal attachment: pixel offset from the left or right parent edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XAnchor {
    /// Offset of the button's left edge from the parent's left edge.
    FromLeft(i32),
    /// Offset of the button's right edge from the parent's right edge.
    FromRight(i32),
}

/// Vertical attachment: pixel offset from the top or bottom parent edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YAnchor {
    /// Offset of the button's top edge from the parent's top edge.
    FromTop(i32),
    /// Offset of the button's bottom edge from the parent's bottom edge.
    FromBottom(i32),
}

/// Where the overlay button sits relative to its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonPosition {
    /// Horizontal rule.
    pub x: XAnchor,
    /// Vertical rule.
    pub y: YAnchor,
}

impl Default for ButtonPosition {
    /// Tucked into the parent's top-right corner.
    fn default() -> Self {
        Self {
            x: XAnchor::FromRight(1),
            y: YAnchor::FromTop(1),
        }
    }
}

impl ButtonPosition {
    /// Resolve to a concrete button rectangle inside `parent`.
    ///
    /// The result is clamped so a position persisted against a larger
    /// parent cannot place the button outside a smaller one.
    pub fn resolve(&self, parent: Rect, size: i32) -> Rect {
        let x = match self.x {
            XAnchor::FromLeft(offset) => parent.left() + offset,
            XAnchor::FromRight(offset) => parent.right() - size - offset,
        };
        let y = match self.y {
            YAnchor::FromTop(offset) => parent.top() + offset,
            YAnchor::FromBottom(offset) => parent.bottom() - size - offset,
        };
        Rect::new(
            x.clamp(parent.left(), (parent.right() - size).max(parent.left())),
            y.clamp(parent.top(), (parent.bottom() - size).max(parent.top())),
            size,
            size,
        )
    }

    /// Position nearest to a pointer location during a drag.
    ///
    /// Returns `None` when the pointer is outside `parent`; the caller
    /// keeps the previous position in that case. The button is centered on
    /// the pointer (clamped inside the parent) and re-anchored to whichever
    /// edges the pointer is closest to.
    pub fn from_pointer(parent: Rect, size: i32, px: i32, py: i32) -> Option<ButtonPosition> {
        if !parent.contains_point(px, py) {
            return None;
        }

        let bx = (px - size / 2).clamp(parent.left(), (parent.right() - size).max(parent.left()));
        let by = (py - size / 2).clamp(parent.top(), (parent.bottom() - size).max(parent.top()));

        let x = if px - parent.left() <= parent.right() - px {
            XAnchor::FromLeft(bx - parent.left())
        } else {
            XAnchor::FromRight(parent.right() - (bx + size))
        };
        let y = if py - parent.top() <= parent.bottom() - py {
            YAnchor::FromTop(by - parent.top())
        } else {
            YAnchor::FromBottom(parent.bottom() - (by + size))
        };
        Some(ButtonPosition { x, y })
    }
}
