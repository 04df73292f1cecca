//! Overlay screen view model.
//!
//! Computes where every widget sits for a given window size and wires the
//! grid, search pipeline, and memory bank together. Rendering and input
//! dispatch stay with the host; this type only answers "what is shown
//! where".

use crate::grid::ItemGrid;
use crate::metrics::{
    GRID_LEFT, GRID_SLOT_SIZE, GRID_TOP, LOCATION_TAB_OFFSET, LOCATION_TAB_SIZE,
    LOCATION_TAB_SPACING, MAX_GRID_COLUMNS, MAX_GRID_ROWS, MIN_GRID_COLUMNS, MIN_GRID_ROWS,
    SCROLL_RIGHT_INSET, SCROLL_WIDTH, SEARCH_HEIGHT, SEARCH_LEFT, SEARCH_RIGHT_INSET, SEARCH_TOP,
    SETTINGS_RIGHT, SETTINGS_SIZE, SETTINGS_TOP, SMALL_MENU_HEIGHT, SMALL_MENU_WIDTH, TITLE_LEFT,
    TITLE_TOP,
};
use stashtrack_core::{GameId, Rect, StackEntry};
use stashtrack_memory::MemoryBank;
use stashtrack_search::FilterCache;
use tracing::debug;

/// Resolved widget placement for one window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The centered menu panel.
    pub menu: Rect,
    /// Baseline origin of the title text.
    pub title_pos: (i32, i32),
    /// Search field rectangle.
    pub search_field: Rect,
    /// Top-left corner of the item grid.
    pub grid_origin: (i32, i32),
    /// Settings button rectangle.
    pub settings_button: Rect,
    /// Scroll bar track rectangle.
    pub scroll_track: Rect,
    /// Grid columns that fit.
    pub columns: usize,
    /// Grid rows that fit.
    pub rows: usize,
}

/// Compute widget placement, shrinking the requested grid until the menu
/// fits the window (never below the minimum grid).
pub fn compute_layout(
    window_width: i32,
    window_height: i32,
    want_columns: usize,
    want_rows: usize,
) -> ScreenLayout {
    let mut columns = want_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
    let mut menu_width = menu_width_for(columns);
    while menu_width > window_width && columns > MIN_GRID_COLUMNS {
        columns -= 1;
        menu_width = menu_width_for(columns);
    }

    let mut rows = want_rows.clamp(MIN_GRID_ROWS, MAX_GRID_ROWS);
    let mut menu_height = menu_height_for(rows);
    while menu_height > window_height && rows > MIN_GRID_ROWS {
        rows -= 1;
        menu_height = menu_height_for(rows);
    }

    let left = (window_width - menu_width) / 2;
    let top = (window_height - menu_height) / 2;
    let menu = Rect::new(left, top, menu_width, menu_height);

    ScreenLayout {
        menu,
        title_pos: (left + TITLE_LEFT, top + TITLE_TOP),
        search_field: Rect::new(
            left + SEARCH_LEFT,
            top + SEARCH_TOP,
            menu_width - SEARCH_RIGHT_INSET,
            SEARCH_HEIGHT,
        ),
        grid_origin: (left + GRID_LEFT, top + GRID_TOP),
        settings_button: Rect::new(
            left + menu_width - SETTINGS_RIGHT - SETTINGS_SIZE,
            top + SETTINGS_TOP,
            SETTINGS_SIZE,
            SETTINGS_SIZE,
        ),
        scroll_track: Rect::new(
            left + menu_width - SCROLL_RIGHT_INSET,
            top + GRID_TOP,
            SCROLL_WIDTH,
            rows as i32 * GRID_SLOT_SIZE,
        ),
        columns,
        rows,
    }
}

fn menu_width_for(columns: usize) -> i32 {
    SMALL_MENU_WIDTH + (columns as i32 - MIN_GRID_COLUMNS as i32) * GRID_SLOT_SIZE
}

fn menu_height_for(rows: usize) -> i32 {
    SMALL_MENU_HEIGHT + (rows as i32 - MIN_GRID_ROWS as i32) * GRID_SLOT_SIZE
}

/// The searchable remembered-contents overlay.
#[derive(Debug)]
pub struct OverlayScreen {
    layout: ScreenLayout,
    grid: ItemGrid,
    cache: FilterCache,
    active_location: Option<GameId>,
    scroll_enabled: bool,
}

impl OverlayScreen {
    /// Open the overlay for `bank`, starting at `location` (or the bank's
    /// first known location).
    pub fn open(
        window: (i32, i32),
        want_columns: usize,
        want_rows: usize,
        bank: &MemoryBank,
        location: Option<GameId>,
    ) -> Self {
        debug!(?window, "opened overlay screen");
        let layout = compute_layout(window.0, window.1, want_columns, want_rows);
        let mut screen = Self {
            grid: ItemGrid::new(layout.columns, layout.rows),
            layout,
            cache: FilterCache::new(),
            active_location: location.or_else(|| bank.keys().first().cloned()),
            scroll_enabled: false,
        };
        screen.reload(bank);
        screen
    }

    /// Re-read the active location's remembered contents (memory update or
    /// location switch) and re-apply the standing query.
    pub fn reload(&mut self, bank: &MemoryBank) {
        let counts: Vec<StackEntry> = match &self.active_location {
            Some(location) => bank.counts(location).to_vec(),
            None => Vec::new(),
        };
        self.cache.set_entries(stashtrack_search::snapshot(counts));
        self.sync_grid();
    }

    /// Apply a new search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.cache.set_query(query);
        self.sync_grid();
    }

    /// Switch the overlay to another location's contents.
    pub fn switch_location(&mut self, bank: &MemoryBank, location: GameId) {
        debug!(%location, "switched overlay location");
        self.active_location = Some(location);
        self.reload(bank);
    }

    fn sync_grid(&mut self) {
        self.grid.set_items(self.cache.view().to_vec());
        self.scroll_enabled = self.grid.needs_scroll();
    }

    /// Location whose contents are displayed.
    pub fn active_location(&self) -> Option<&GameId> {
        self.active_location.as_ref()
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.cache.query()
    }

    /// Whether the scroll bar is interactive (results overflow the grid).
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Widget placement.
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// The item grid.
    pub fn grid(&self) -> &ItemGrid {
        &self.grid
    }

    /// Mutable access to the item grid (scrolling).
    pub fn grid_mut(&mut self) -> &mut ItemGrid {
        &mut self.grid
    }

    /// Tab order for the location buttons: configured favourites first
    /// (those the bank knows), then the bank's remaining locations in
    /// first-recorded order.
    pub fn location_tabs(&self, preferred: &[GameId], bank: &MemoryBank) -> Vec<GameId> {
        let mut tabs: Vec<GameId> = preferred
            .iter()
            .filter(|key| bank.keys().contains(*key))
            .cloned()
            .collect();
        for key in bank.keys() {
            if !tabs.contains(key) {
                tabs.push(key.clone());
            }
        }
        tabs
    }

    /// Rectangle of the `index`-th location tab, stacked left of the menu.
    pub fn tab_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.layout.menu.left() - LOCATION_TAB_OFFSET,
            self.layout.menu.top() + index as i32 * LOCATION_TAB_SPACING,
            LOCATION_TAB_SIZE,
            LOCATION_TAB_SIZE,
        )
    }
}
