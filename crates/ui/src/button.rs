//! The in-inventory overlay button with its satellite buttons.
//!
//! Composes the drag tracker, nudge placement, and hover expansion into
//! one unit the host feeds pointer events to. The host renders whatever
//! [`OverlayButton::frame`] returns and acts on the responses.

use stashtrack_core::Rect;
use stashtrack_layout::{
    place_group, ButtonPosition, DragOutcome, DragTracker, GroupHover, GroupPlacement, BUTTON_SIZE,
};

/// What a secondary button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryAction {
    /// Forget the remembered contents behind the open container.
    Forget,
    /// Rename the remembered container.
    Rename,
}

/// What the host should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonResponse {
    /// Event was not for this button.
    Ignored,
    /// Open the overlay screen.
    OpenOverlay,
    /// A secondary button was pressed.
    Secondary(SecondaryAction),
    /// Mid-drag move; placement needs recomputing.
    PositionChanged(ButtonPosition),
    /// Drag finished; persist this position.
    PositionCommitted(ButtonPosition),
}

/// Everything the host needs to draw the button group this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFrame {
    /// Primary button rectangle.
    pub primary: Rect,
    /// Visible secondary buttons with their rectangles; empty while
    /// collapsed or dragging.
    pub secondaries: Vec<(SecondaryAction, Rect)>,
    /// Whether the button is being dragged.
    pub dragging: bool,
}

/// The floating overlay button group.
#[derive(Debug)]
pub struct OverlayButton {
    tracker: DragTracker,
    hover: GroupHover,
    actions: Vec<SecondaryAction>,
    visible_secondaries: Vec<(SecondaryAction, Rect)>,
}

impl OverlayButton {
    /// Create the button at a persisted (or default) position.
    pub fn new(position: ButtonPosition) -> Self {
        Self {
            tracker: DragTracker::new(position, BUTTON_SIZE),
            hover: GroupHover::default(),
            actions: vec![SecondaryAction::Forget, SecondaryAction::Rename],
            visible_secondaries: Vec::new(),
        }
    }

    /// Recompute geometry and hover state for one frame.
    ///
    /// `obstacles` are the other widget rectangles on the container
    /// screen; `bounds` is the screen rectangle.
    pub fn frame(
        &mut self,
        pointer: (i32, i32),
        parent: Rect,
        obstacles: &[Rect],
        bounds: Rect,
    ) -> ButtonFrame {
        let primary = self.tracker.primary_rect(parent);
        let placement: GroupPlacement =
            place_group(primary, self.actions.len(), obstacles, bounds);

        let expanded = self
            .hover
            .update(&placement, pointer, self.tracker.is_dragging());

        self.visible_secondaries = if expanded {
            self.actions
                .iter()
                .copied()
                .zip(placement.secondaries.iter().copied())
                .collect()
        } else {
            Vec::new()
        };

        ButtonFrame {
            primary,
            secondaries: self.visible_secondaries.clone(),
            dragging: self.tracker.is_dragging(),
        }
    }

    /// Feed a pointer-down.
    pub fn pointer_down(&mut self, px: i32, py: i32, now_ms: u64, parent: Rect) -> ButtonResponse {
        // Secondary buttons fire on press, before the primary can arm.
        for (action, rect) in &self.visible_secondaries {
            if rect.contains_point(px, py) {
                return ButtonResponse::Secondary(*action);
            }
        }
        // Arming is silent; the click or drag resolves on release.
        self.tracker.pointer_down(px, py, now_ms, parent);
        ButtonResponse::Ignored
    }

    /// Feed a pointer-move.
    pub fn pointer_move(&mut self, px: i32, py: i32, now_ms: u64, parent: Rect) -> ButtonResponse {
        match self.tracker.pointer_move(px, py, now_ms, parent) {
            DragOutcome::Moved(position) => ButtonResponse::PositionChanged(position),
            _ => ButtonResponse::Ignored,
        }
    }

    /// Feed a pointer-up.
    pub fn pointer_up(&mut self, px: i32, py: i32, parent: Rect) -> ButtonResponse {
        match self.tracker.pointer_up(px, py, parent) {
            DragOutcome::Click => ButtonResponse::OpenOverlay,
            DragOutcome::Committed(position) => ButtonResponse::PositionCommitted(position),
            _ => ButtonResponse::Ignored,
        }
    }

    /// The button's current anchored position.
    pub fn position(&self) -> ButtonPosition {
        self.tracker.position()
    }
}
