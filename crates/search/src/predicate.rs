//! Case-insensitive text matching over remembered stacks.
//!
//! A query is split on whitespace into tokens; an entry matches when every
//! token is a substring of its lowercased display name, its identity path,
//! or any text buried in its tag payload.

use serde_json::Value;
use stashtrack_core::StackEntry;

/// Whether `entry` matches `query`. The empty (or all-whitespace) query
/// matches everything.
pub fn matches(entry: &StackEntry, query: &str) -> bool {
    let mut tokens = query.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return true;
    }
    let haystack = haystack(entry);
    tokens.all(|token| haystack.contains(&token.to_lowercase()))
}

/// Lowercased searchable text for an entry: display name, identity path,
/// and every string fragment in the tag payload.
pub fn haystack(entry: &StackEntry) -> String {
    let mut out = entry.display_name.to_lowercase();
    out.push(' ');
    out.push_str(entry.item.path());
    if let Some(tag) = &entry.tag {
        collect_tag_text(tag, &mut out);
    }
    out
}

fn collect_tag_text(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push(' ');
            out.push_str(&s.to_lowercase());
        }
        Value::Number(n) => {
            out.push(' ');
            out.push_str(&n.to_string());
        }
        Value::Array(items) => {
            for item in items {
                collect_tag_text(item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                out.push(' ');
                out.push_str(&key.to_lowercase());
                collect_tag_text(item, out);
            }
        }
        Value::Bool(_) | Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stashtrack_core::GameId;

    fn entry(name: &str) -> StackEntry {
        StackEntry::new(GameId::parse("iron_ingot").unwrap(), name, 1)
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&entry("Iron Ingot"), ""));
        assert!(matches(&entry("Iron Ingot"), "   "));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(matches(&entry("Iron Ingot"), "IRON"));
        assert!(matches(&entry("Iron Ingot"), "ingot"));
        assert!(!matches(&entry("Iron Ingot"), "gold"));
    }

    #[test]
    fn all_tokens_must_match() {
        assert!(matches(&entry("Iron Ingot"), "iron ingot"));
        assert!(!matches(&entry("Iron Ingot"), "iron sword"));
    }

    #[test]
    fn identity_path_is_searchable() {
        // Display name and id path differ; both should hit.
        let e = StackEntry::new(GameId::parse("gold_block").unwrap(), "Block of Gold", 1);
        assert!(matches(&e, "gold_block"));
        assert!(matches(&e, "block of"));
    }

    #[test]
    fn tag_text_is_searchable() {
        let e = StackEntry::with_tag(
            GameId::parse("sword").unwrap(),
            json!({"display": {"Name": "Excalibur"}, "enchantments": ["Sharpness", 5]}),
            "Sword",
            1,
        );
        assert!(matches(&e, "excalibur"));
        assert!(matches(&e, "sharpness"));
        assert!(matches(&e, "enchantments"));
        assert!(matches(&e, "5"));
        assert!(!matches(&e, "smite"));
    }
}
