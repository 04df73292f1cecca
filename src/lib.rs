#![warn(missing_docs)]
//! stashtrack — remembered-container-contents overlay core.
//!
//! Tracks what items were last seen in containers per save/server and
//! exposes the state a client UI needs to render a searchable grid of
//! those remembered contents, a draggable overlay button with satellite
//! buttons, and per-container tooltip previews. The host engine owns
//! rendering, input dispatch, and persistence; everything here is plain
//! values and explicit inputs.

pub mod config;

pub use config::{ConfigError, GuiConfig, OverlayConfig, DEFAULT_CONFIG_PATH};

pub use stashtrack_core::{
    ConnectionInfo, Direction, GameId, IdError, Rect, SessionContext, StackEntry,
};
pub use stashtrack_layout::{
    ButtonPosition, DragOutcome, DragState, DragTracker, GroupPlacement, LayoutError,
};
pub use stashtrack_memory::{BankMetadata, BankView, ContentsLedger, MemoryBank, MemoryStore};
pub use stashtrack_search::FilterCache;
pub use stashtrack_ui::{
    ButtonFrame, ButtonResponse, ContentsPreview, ItemGrid, OverlayButton, OverlayScreen,
    SecondaryAction,
};
