#![warn(missing_docs)]
//! Floating-button layout: nudge placement, drag repositioning, hover
//! expansion.

pub mod drag;
pub mod group;
pub mod nudge;
pub mod position;

use thiserror::Error;

pub use drag::{DragOutcome, DragState, DragTracker, DRAG_HOLD_MS};
pub use group::{place_group, GroupHover, GroupPlacement, BUTTON_SIZE, HOVER_INFLATE, SECONDARY_SPACING};
pub use nudge::{choose_direction, encompassing, is_free, rectangle_for, DEFAULT_PRIORITY};
pub use position::{ButtonPosition, XAnchor, YAnchor};

/// Invalid-argument errors from layout computations.
///
/// Every other layout operation is total; a placement that fits nowhere
/// degrades to the first priority direction instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// `encompassing` needs at least one rectangle.
    #[error("cannot compute the encompassing rectangle of no rectangles")]
    EmptyEncompass,
    /// Secondary button count must be positive.
    #[error("secondary button count must be positive (got {0})")]
    InvalidCount(i32),
    /// Button spacing must be positive.
    #[error("button spacing must be positive (got {0})")]
    InvalidSpacing(i32),
}
