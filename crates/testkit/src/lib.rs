#![warn(missing_docs)]
//! Deterministic test surfaces: entry builders and scripted pointer
//! timelines.

use stashtrack_core::{GameId, Rect, StackEntry};
use stashtrack_layout::{DragOutcome, DragTracker};

/// Build a [`StackEntry`] from a bare path, deriving a display name.
///
/// `"iron_ingot"` becomes `Iron Ingot`; panics on an invalid path, which
/// is what a test wants.
pub fn stack(path: &str, count: u64) -> StackEntry {
    let name = path
        .split(&['_', '/'][..])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    StackEntry::new(GameId::parse(path).expect("valid test item path"), name, count)
}

/// Build a tagged [`StackEntry`] from a path and a JSON tag literal.
pub fn stack_tagged(path: &str, tag: serde_json::Value, count: u64) -> StackEntry {
    let mut entry = stack(path, count);
    entry.tag = Some(tag);
    entry
}

/// Parse a [`GameId`], panicking on failure.
pub fn game_id(input: &str) -> GameId {
    GameId::parse(input).expect("valid test identifier")
}

/// One step of a scripted pointer timeline.
#[derive(Debug, Clone, Copy)]
pub enum PointerStep {
    /// Press at a position and timestamp.
    Down {
        /// Pointer position.
        pos: (i32, i32),
        /// Milliseconds since some arbitrary origin.
        at_ms: u64,
    },
    /// Move to a position at a timestamp.
    Move {
        /// Pointer position.
        pos: (i32, i32),
        /// Milliseconds since some arbitrary origin.
        at_ms: u64,
    },
    /// Release at a position.
    Up {
        /// Pointer position.
        pos: (i32, i32),
    },
}

/// Drive a [`DragTracker`] through a pointer timeline, collecting the
/// outcome of every step (`Ignored` for consumed downs).
pub fn run_pointer_script(
    tracker: &mut DragTracker,
    parent: Rect,
    steps: &[PointerStep],
) -> Vec<DragOutcome> {
    steps
        .iter()
        .map(|step| match *step {
            PointerStep::Down { pos, at_ms } => {
                tracker.pointer_down(pos.0, pos.1, at_ms, parent);
                DragOutcome::Ignored
            }
            PointerStep::Move { pos, at_ms } => tracker.pointer_move(pos.0, pos.1, at_ms, parent),
            PointerStep::Up { pos } => tracker.pointer_up(pos.0, pos.1, parent),
        })
        .collect()
}

/// Install a test tracing subscriber honouring `RUST_LOG`; safe to call
/// from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
