//! Display pipeline for remembered stacks: sort, filter, scroll check.
//!
//! Recomputation is whole-pass on every change. The remembered list for a
//! location is hundreds of entries, not millions; recomputing per
//! keystroke is cheaper than maintaining anything incremental.

use crate::predicate;
use stashtrack_core::StackEntry;
use tracing::debug;

/// Materialize remembered counts as a display-ordered list: count
/// descending, ties keeping their first-seen order.
pub fn snapshot(counts: impl IntoIterator<Item = StackEntry>) -> Vec<StackEntry> {
    let mut entries: Vec<StackEntry> = counts.into_iter().collect();
    // Stable sort so equal counts keep the source order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Entries matching `query`, keeping their relative order. The empty
/// query returns the input unchanged.
pub fn filter(entries: &[StackEntry], query: &str) -> Vec<StackEntry> {
    if query.split_whitespace().next().is_none() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| predicate::matches(e, query))
        .cloned()
        .collect()
}

/// Whether `result_count` entries overflow a `grid_width` × `grid_height`
/// grid and need a scroll bar.
pub fn needs_scroll(result_count: usize, grid_width: usize, grid_height: usize) -> bool {
    result_count > grid_width * grid_height
}

/// Cached filtered view of the active location's remembered stacks.
///
/// Owns the last computed result; both the source entries and the query
/// replace it wholesale when they change (last write wins, single
/// threaded).
#[derive(Debug, Default)]
pub struct FilterCache {
    entries: Vec<StackEntry>,
    query: String,
    view: Vec<StackEntry>,
}

impl FilterCache {
    /// Empty cache with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source entries (location switch or memory update) and
    /// recompute the view under the current query.
    pub fn set_entries(&mut self, entries: Vec<StackEntry>) {
        self.entries = entries;
        self.recompute();
    }

    /// Replace the query (a keystroke) and recompute the view.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.recompute();
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All source entries, unfiltered.
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// The filtered, display-ordered view.
    pub fn view(&self) -> &[StackEntry] {
        &self.view
    }

    fn recompute(&mut self) {
        self.view = filter(&self.entries, &self.query);
        debug!(
            total = self.entries.len(),
            shown = self.view.len(),
            "recomputed filtered view"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stashtrack_core::GameId;

    fn entry(path: &str, count: u64) -> StackEntry {
        StackEntry::new(GameId::parse(path).unwrap(), path.replace('_', " "), count)
    }

    #[test]
    fn snapshot_sorts_by_count_descending() {
        let out = snapshot([entry("a", 5), entry("b", 12), entry("c", 5)]);
        let counts: Vec<u64> = out.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![12, 5, 5]);
    }

    #[test]
    fn snapshot_keeps_tie_order_stable() {
        // {a:5, b:12, c:5} inserted in order a, b, c.
        let out = snapshot([entry("a", 5), entry("b", 12), entry("c", 5)]);
        let paths: Vec<&str> = out.iter().map(|e| e.item.path()).collect();
        assert_eq!(paths, vec!["b", "a", "c"]);
    }

    #[test]
    fn snapshot_of_nothing_is_empty() {
        assert!(snapshot([]).is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        let entries = vec![entry("stone", 3), entry("dirt", 1)];
        assert_eq!(filter(&entries, ""), entries);
        assert_eq!(filter(&entries, "  "), entries);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let entries = snapshot([entry("stone_brick", 9), entry("stone", 4), entry("dirt", 2)]);
        let out = filter(&entries, "stone");
        let paths: Vec<&str> = out.iter().map(|e| e.item.path()).collect();
        assert_eq!(paths, vec!["stone_brick", "stone"]);
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        assert!(filter(&[], "anything").is_empty());
    }

    #[test]
    fn scroll_needed_only_past_grid_capacity() {
        assert!(!needs_scroll(54, 9, 6));
        assert!(needs_scroll(55, 9, 6));
        assert!(!needs_scroll(0, 9, 6));
    }

    #[test]
    fn cache_recomputes_on_query_and_data_change() {
        let mut cache = FilterCache::new();
        cache.set_entries(snapshot([entry("stone", 3), entry("dirt", 1)]));
        assert_eq!(cache.view().len(), 2);

        cache.set_query("sto");
        assert_eq!(cache.view().len(), 1);
        assert_eq!(cache.view()[0].item.path(), "stone");

        // New data is filtered under the standing query.
        cache.set_entries(snapshot([entry("sandstone", 8), entry("dirt", 2)]));
        assert_eq!(cache.view().len(), 1);
        assert_eq!(cache.view()[0].item.path(), "sandstone");

        cache.set_query("");
        assert_eq!(cache.view().len(), 2);
    }
}
