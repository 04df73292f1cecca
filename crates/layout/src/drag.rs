//! Drag-and-drop repositioning for the overlay button.
//!
//! Pointer events arrive with their timestamps from the host; the tracker
//! never reads a clock. Holding the button for [`DRAG_HOLD_MS`] and moving
//! starts a drag; a release before that is an ordinary click.

use crate::position::ButtonPosition;
use stashtrack_core::Rect;
use tracing::debug;

/// How long the pointer must stay down before movement starts a drag.
pub const DRAG_HOLD_MS: u64 = 200;

/// Drag progress for one overlay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No pointer interaction in progress.
    Idle,
    /// Pointer went down on the button; waiting to see whether this
    /// becomes a click or a drag.
    Armed {
        /// Timestamp of the pointer-down, in host milliseconds.
        pressed_at_ms: u64,
        /// Pointer location of the pointer-down.
        origin: (i32, i32),
    },
    /// The button is being dragged; it follows the pointer.
    Dragging,
}

/// What the host should do after feeding an event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing happened; the event was not for this button.
    Ignored,
    /// The button was clicked: trigger its primary action.
    Click,
    /// The drag moved the button; re-layout against the new position.
    Moved(ButtonPosition),
    /// The drag finished; persist this position.
    Committed(ButtonPosition),
}

/// State machine turning raw pointer events into click/drag outcomes.
#[derive(Debug)]
pub struct DragTracker {
    state: DragState,
    position: ButtonPosition,
    button_size: i32,
}

impl DragTracker {
    /// Create a tracker for a button restored to `position`.
    pub fn new(position: ButtonPosition, button_size: i32) -> Self {
        Self {
            state: DragState::Idle,
            position,
            button_size,
        }
    }

    /// Current machine state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress. Secondary buttons stay hidden while
    /// this is true.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// The button's current (possibly mid-drag) position.
    pub fn position(&self) -> ButtonPosition {
        self.position
    }

    /// The button rectangle for the given parent container.
    pub fn primary_rect(&self, parent: Rect) -> Rect {
        self.position.resolve(parent, self.button_size)
    }

    /// Feed a pointer-down. Returns true when the press landed on the
    /// button and armed the tracker.
    pub fn pointer_down(&mut self, px: i32, py: i32, now_ms: u64, parent: Rect) -> bool {
        if self.primary_rect(parent).contains_point(px, py) {
            self.state = DragState::Armed {
                pressed_at_ms: now_ms,
                origin: (px, py),
            };
            true
        } else {
            false
        }
    }

    /// Feed a pointer-move.
    pub fn pointer_move(&mut self, px: i32, py: i32, now_ms: u64, parent: Rect) -> DragOutcome {
        if let DragState::Armed {
            pressed_at_ms,
            origin,
        } = self.state
        {
            let held_long_enough = now_ms.saturating_sub(pressed_at_ms) >= DRAG_HOLD_MS;
            if held_long_enough && origin != (px, py) {
                debug!(px, py, "overlay button drag started");
                self.state = DragState::Dragging;
            }
        }

        if self.state != DragState::Dragging {
            return DragOutcome::Ignored;
        }

        match ButtonPosition::from_pointer(parent, self.button_size, px, py) {
            Some(position) => {
                self.position = position;
                DragOutcome::Moved(position)
            }
            // Pointer left the parent; the button keeps its last spot.
            None => DragOutcome::Ignored,
        }
    }

    /// Feed a pointer-up.
    pub fn pointer_up(&mut self, px: i32, py: i32, parent: Rect) -> DragOutcome {
        match self.state {
            DragState::Dragging => {
                self.state = DragState::Idle;
                debug!(position = ?self.position, "overlay button drag committed");
                DragOutcome::Committed(self.position)
            }
            DragState::Armed { .. } => {
                self.state = DragState::Idle;
                if self.primary_rect(parent).contains_point(px, py) {
                    DragOutcome::Click
                } else {
                    DragOutcome::Ignored
                }
            }
            DragState::Idle => DragOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Rect = Rect {
        x: 0,
        y: 0,
        width: 200,
        height: 150,
    };

    fn tracker() -> DragTracker {
        // Default position: top-right corner, so the button sits at (190, 1).
        DragTracker::new(ButtonPosition::default(), 9)
    }

    #[test]
    fn press_outside_button_does_not_arm() {
        let mut t = tracker();
        assert!(!t.pointer_down(5, 5, 0, PARENT));
        assert_eq!(t.state(), DragState::Idle);
    }

    #[test]
    fn quick_release_is_a_click() {
        let mut t = tracker();
        assert!(t.pointer_down(192, 3, 0, PARENT));
        assert_eq!(t.pointer_up(192, 3, PARENT), DragOutcome::Click);
        assert_eq!(t.state(), DragState::Idle);
    }

    #[test]
    fn movement_before_threshold_stays_armed() {
        let mut t = tracker();
        t.pointer_down(192, 3, 0, PARENT);
        assert_eq!(t.pointer_move(100, 80, 150, PARENT), DragOutcome::Ignored);
        assert!(matches!(t.state(), DragState::Armed { .. }));
    }

    #[test]
    fn held_pointer_without_movement_stays_armed() {
        let mut t = tracker();
        t.pointer_down(192, 3, 0, PARENT);
        assert_eq!(t.pointer_move(192, 3, 400, PARENT), DragOutcome::Ignored);
        assert!(matches!(t.state(), DragState::Armed { .. }));
    }

    #[test]
    fn held_movement_starts_and_commits_a_drag() {
        let mut t = tracker();
        t.pointer_down(192, 3, 0, PARENT);

        let moved = t.pointer_move(100, 80, 250, PARENT);
        assert!(matches!(moved, DragOutcome::Moved(_)));
        assert!(t.is_dragging());

        match t.pointer_up(100, 80, PARENT) {
            DragOutcome::Committed(position) => {
                assert_eq!(position, t.position());
                assert_eq!(position.resolve(PARENT, 9), Rect::new(95, 75, 9, 9));
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(t.state(), DragState::Idle);
    }

    #[test]
    fn drag_ignores_pointer_outside_parent() {
        let mut t = tracker();
        t.pointer_down(192, 3, 0, PARENT);
        t.pointer_move(100, 80, 250, PARENT);
        let before = t.position();

        assert_eq!(t.pointer_move(500, 500, 300, PARENT), DragOutcome::Ignored);
        assert_eq!(t.position(), before);
        assert!(t.is_dragging());
    }
}
