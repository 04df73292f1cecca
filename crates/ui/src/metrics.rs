//! Fixed pixel metrics for the overlay screen.
//!
//! All values are in GUI pixels, pre-scaling. The grid trades slots of
//! [`GRID_SLOT_SIZE`] pixels; everything else is offsets measured from the
//! menu panel's corners.

/// Edge length of one item slot in the grid.
pub const GRID_SLOT_SIZE: i32 = 18;

/// Fewest grid columns the overlay will render.
pub const MIN_GRID_COLUMNS: usize = 9;
/// Most grid columns the overlay will render.
pub const MAX_GRID_COLUMNS: usize = 18;
/// Fewest grid rows the overlay will render.
pub const MIN_GRID_ROWS: usize = 6;
/// Most grid rows the overlay will render.
pub const MAX_GRID_ROWS: usize = 12;

/// Menu panel size at the minimum grid dimensions.
pub const SMALL_MENU_WIDTH: i32 = 192;
/// Menu panel height at the minimum grid dimensions.
pub const SMALL_MENU_HEIGHT: i32 = 153;

/// Title text offset from the menu's top-left corner.
pub const TITLE_LEFT: i32 = 8;
/// Title text offset from the menu's top edge.
pub const TITLE_TOP: i32 = 8;

/// Search field offset from the menu's left edge.
pub const SEARCH_LEFT: i32 = 8;
/// Search field offset from the menu's top edge.
pub const SEARCH_TOP: i32 = 24;
/// Search field height.
pub const SEARCH_HEIGHT: i32 = 12;
/// Pixels the search field stops short of the menu's right edge.
pub const SEARCH_RIGHT_INSET: i32 = 16;

/// Item grid offset from the menu's left edge.
pub const GRID_LEFT: i32 = 7;
/// Item grid offset from the menu's top edge.
pub const GRID_TOP: i32 = 38;

/// Settings button inset from the menu's right edge.
pub const SETTINGS_RIGHT: i32 = 6;
/// Settings button offset from the menu's top edge.
pub const SETTINGS_TOP: i32 = 5;
/// Settings button edge length.
pub const SETTINGS_SIZE: i32 = 14;

/// Scroll bar inset from the menu's right edge.
pub const SCROLL_RIGHT_INSET: i32 = 19;
/// Scroll bar width.
pub const SCROLL_WIDTH: i32 = 12;

/// How far left of the menu the location tabs sit.
pub const LOCATION_TAB_OFFSET: i32 = 24;
/// Vertical spacing between location tabs.
pub const LOCATION_TAB_SPACING: i32 = 24;
/// Location tab edge length.
pub const LOCATION_TAB_SIZE: i32 = 20;

/// Tooltip preview: most icons shown without the detailed view.
pub const PREVIEW_NORMAL_MAX: usize = 9;
/// Tooltip preview: most icons shown in the detailed view.
pub const PREVIEW_DETAILED_MAX: usize = 27;
/// Tooltip preview: icons per row.
pub const PREVIEW_PER_LINE: usize = 9;
