#![warn(missing_docs)]
//! Host-independent view models for the remembered-contents overlay.

pub mod button;
pub mod grid;
pub mod metrics;
pub mod preview;
pub mod screen;

pub use button::{ButtonFrame, ButtonResponse, OverlayButton, SecondaryAction};
pub use grid::ItemGrid;
pub use preview::{preview_lines, BankPreview, ContentsPreview};
pub use screen::{compute_layout, OverlayScreen, ScreenLayout};
