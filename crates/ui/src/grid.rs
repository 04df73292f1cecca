//! Item grid view model: visible window and scroll bookkeeping.

use crate::metrics::{
    GRID_SLOT_SIZE, MAX_GRID_COLUMNS, MAX_GRID_ROWS, MIN_GRID_COLUMNS, MIN_GRID_ROWS,
};
use stashtrack_core::{Rect, StackEntry};

/// The scrollable grid of remembered item stacks.
///
/// Holds the filtered entries and which row the view starts at; rendering
/// asks for the visible slice and per-slot rectangles.
#[derive(Debug)]
pub struct ItemGrid {
    columns: usize,
    rows: usize,
    row_offset: usize,
    items: Vec<StackEntry>,
}

impl ItemGrid {
    /// Create a grid, clamping dimensions to the supported range.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS),
            rows: rows.clamp(MIN_GRID_ROWS, MAX_GRID_ROWS),
            row_offset: 0,
            items: Vec::new(),
        }
    }

    /// Visible column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Visible row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Replace the displayed entries, clamping the scroll position into
    /// the new range.
    pub fn set_items(&mut self, items: Vec<StackEntry>) {
        self.items = items;
        self.row_offset = self.row_offset.min(self.max_row_offset());
    }

    /// All entries, not just the visible window.
    pub fn items(&self) -> &[StackEntry] {
        &self.items
    }

    /// Rows the full item list occupies.
    pub fn total_rows(&self) -> usize {
        self.items.len().div_ceil(self.columns)
    }

    /// Highest valid starting row.
    pub fn max_row_offset(&self) -> usize {
        self.total_rows().saturating_sub(self.rows)
    }

    /// First visible row.
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Whether the items overflow the visible window.
    pub fn needs_scroll(&self) -> bool {
        stashtrack_search::needs_scroll(self.items.len(), self.columns, self.rows)
    }

    /// Jump to a scroll-bar position in `0.0..=1.0`.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        let max = self.max_row_offset();
        let progress = progress.clamp(0.0, 1.0);
        self.row_offset = (progress * max as f32).round() as usize;
    }

    /// Scroll-bar position corresponding to the current row.
    pub fn scroll_progress(&self) -> f32 {
        let max = self.max_row_offset();
        if max == 0 {
            0.0
        } else {
            self.row_offset as f32 / max as f32
        }
    }

    /// Scroll by whole rows (negative is up).
    pub fn scroll_by_rows(&mut self, delta: i32) {
        let target = self.row_offset as i64 + delta as i64;
        self.row_offset = target.clamp(0, self.max_row_offset() as i64) as usize;
    }

    /// The entries inside the visible window.
    pub fn visible(&self) -> &[StackEntry] {
        let start = (self.row_offset * self.columns).min(self.items.len());
        let end = (start + self.columns * self.rows).min(self.items.len());
        &self.items[start..end]
    }

    /// Slot rectangle for index `i` into [`ItemGrid::visible`], with the
    /// grid's top-left at `origin`.
    pub fn slot_rect(&self, origin: (i32, i32), i: usize) -> Rect {
        let col = (i % self.columns) as i32;
        let row = (i / self.columns) as i32;
        Rect::new(
            origin.0 + col * GRID_SLOT_SIZE,
            origin.1 + row * GRID_SLOT_SIZE,
            GRID_SLOT_SIZE,
            GRID_SLOT_SIZE,
        )
    }
}
