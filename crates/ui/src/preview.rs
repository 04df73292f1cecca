//! Per-container tooltip previews.
//!
//! Hover-tooltip integrations (whatever mod draws them) only need one
//! capability from this core: rows of remembered stacks for a location.

use crate::metrics::{PREVIEW_DETAILED_MAX, PREVIEW_NORMAL_MAX, PREVIEW_PER_LINE};
use stashtrack_core::{GameId, StackEntry};
use stashtrack_memory::MemoryBank;

/// Renders an item preview for a location.
///
/// Implemented once per host tooltip integration; the core ships a
/// bank-backed implementation.
pub trait ContentsPreview {
    /// Rows of stacks to draw under the hovered container, top row first.
    fn preview(&self, location: &GameId) -> Vec<Vec<StackEntry>>;
}

/// Break stacks into rows of `per_line`, showing at most `max` icons.
pub fn preview_lines(
    stacks: &[StackEntry],
    max: usize,
    per_line: usize,
) -> Vec<Vec<StackEntry>> {
    if max == 0 || per_line == 0 {
        return Vec::new();
    }
    stacks
        .iter()
        .take(max)
        .cloned()
        .collect::<Vec<_>>()
        .chunks(per_line)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Preview backed by a memory bank, most plentiful stacks first.
#[derive(Debug)]
pub struct BankPreview<'a> {
    bank: &'a MemoryBank,
    max: usize,
    per_line: usize,
}

impl<'a> BankPreview<'a> {
    /// Preview with the default icon budget.
    pub fn new(bank: &'a MemoryBank) -> Self {
        Self {
            bank,
            max: PREVIEW_NORMAL_MAX,
            per_line: PREVIEW_PER_LINE,
        }
    }

    /// Preview with the detailed-tooltip icon budget.
    pub fn detailed(bank: &'a MemoryBank) -> Self {
        Self {
            bank,
            max: PREVIEW_DETAILED_MAX,
            per_line: PREVIEW_PER_LINE,
        }
    }

    /// Override the icon budget.
    pub fn with_budget(bank: &'a MemoryBank, max: usize, per_line: usize) -> Self {
        Self {
            bank,
            max,
            per_line,
        }
    }
}

impl ContentsPreview for BankPreview<'_> {
    fn preview(&self, location: &GameId) -> Vec<Vec<StackEntry>> {
        let ordered = stashtrack_search::snapshot(self.bank.counts(location).to_vec());
        preview_lines(&ordered, self.max, self.per_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stashtrack_core::SessionContext;

    fn id(path: &str) -> GameId {
        GameId::parse(path).unwrap()
    }

    fn stacks(n: usize) -> Vec<StackEntry> {
        (0..n)
            .map(|i| StackEntry::new(id(&format!("item_{i}")), format!("Item {i}"), (n - i) as u64))
            .collect()
    }

    #[test]
    fn lines_fill_rows_exactly() {
        let lines = preview_lines(&stacks(12), 27, 9);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 9);
        assert_eq!(lines[1].len(), 3);
    }

    #[test]
    fn max_caps_total_icons() {
        let lines = preview_lines(&stacks(30), 9, 9);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 9);
    }

    #[test]
    fn degenerate_budgets_draw_nothing() {
        assert!(preview_lines(&stacks(5), 0, 9).is_empty());
        assert!(preview_lines(&stacks(5), 9, 0).is_empty());
        assert!(preview_lines(&[], 9, 9).is_empty());
    }

    #[test]
    fn bank_preview_orders_by_count() {
        let mut bank = MemoryBank::new(&SessionContext {
            id: "singleplayer/test".into(),
            display_name: "Test".into(),
        });
        bank.record(
            id("overworld"),
            [
                StackEntry::new(id("dirt"), "Dirt", 2),
                StackEntry::new(id("stone"), "Stone", 64),
            ],
        );

        let preview = BankPreview::new(&bank);
        let lines = preview.preview(&id("overworld"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].item.path(), "stone");

        // Unknown locations preview as nothing.
        assert!(preview.preview(&id("the_end")).is_empty());
    }

    #[test]
    fn detailed_preview_shows_more_rows() {
        let mut bank = MemoryBank::new(&SessionContext {
            id: "singleplayer/test".into(),
            display_name: "Test".into(),
        });
        bank.record(id("overworld"), stacks(30));

        let normal = BankPreview::new(&bank).preview(&id("overworld"));
        let detailed = BankPreview::detailed(&bank).preview(&id("overworld"));
        assert_eq!(normal.iter().map(Vec::len).sum::<usize>(), 9);
        assert_eq!(detailed.iter().map(Vec::len).sum::<usize>(), 27);
    }
}
