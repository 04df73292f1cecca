//! Completion suggestions for the search field.
//!
//! Suggestions complete the token being typed (the text after the last
//! whitespace) against the display names of the remembered entries, most
//! plentiful first, so the top suggestion is usually the chest the player
//! is actually hunting for.

use stashtrack_core::StackEntry;

/// Suggest up to `limit` display names completing the final query token.
///
/// Earlier tokens are left alone; an empty or whitespace-terminated query
/// yields no suggestions. Duplicate names keep only their
/// highest-counted occurrence.
pub fn suggest(entries: &[StackEntry], query: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }
    let partial = match query.rsplit(char::is_whitespace).next() {
        Some(token) if !token.is_empty() => token.to_lowercase(),
        _ => return Vec::new(),
    };

    let mut candidates: Vec<(&str, u64)> = Vec::new();
    for entry in entries {
        let name = entry.display_name.as_str();
        if !name.to_lowercase().contains(&partial) {
            continue;
        }
        match candidates.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count = (*count).max(entry.count),
            None => candidates.push((name, entry.count)),
        }
    }

    // Stable: equal counts keep entry order.
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stashtrack_core::GameId;

    fn entry(path: &str, name: &str, count: u64) -> StackEntry {
        StackEntry::new(GameId::parse(path).unwrap(), name, count)
    }

    fn sample() -> Vec<StackEntry> {
        vec![
            entry("iron_ingot", "Iron Ingot", 40),
            entry("iron_block", "Iron Block", 7),
            entry("gold_ingot", "Gold Ingot", 12),
            entry("stone", "Stone", 999),
        ]
    }

    #[test]
    fn completes_final_token_ranked_by_count() {
        let out = suggest(&sample(), "iron", 8);
        assert_eq!(out, vec!["Iron Ingot", "Iron Block"]);
    }

    #[test]
    fn earlier_tokens_do_not_constrain_suggestions() {
        let out = suggest(&sample(), "shiny ing", 8);
        assert_eq!(out, vec!["Iron Ingot", "Gold Ingot"]);
    }

    #[test]
    fn empty_or_trailing_space_yields_nothing() {
        assert!(suggest(&sample(), "", 8).is_empty());
        assert!(suggest(&sample(), "iron ", 8).is_empty());
    }

    #[test]
    fn limit_caps_suggestions() {
        let out = suggest(&sample(), "o", 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "Stone");
    }

    #[test]
    fn duplicate_names_are_deduplicated() {
        let entries = vec![
            entry("iron_ingot", "Iron Ingot", 4),
            entry("iron_ingot", "Iron Ingot", 40),
        ];
        let out = suggest(&entries, "iron", 8);
        assert_eq!(out, vec!["Iron Ingot"]);
    }
}
