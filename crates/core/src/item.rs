//! Remembered item stacks.
//!
//! A [`StackEntry`] is what the overlay remembers about one kind of item at
//! a location: its namespaced identity, an optional structured tag payload
//! (enchantments, custom names, and similar host data), a display name
//! supplied by the host at record time, and how many were seen.

use crate::ident::GameId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One coalesced stack of remembered items.
///
/// Entries with the same identity (item id plus tag payload) are a single
/// multiset element; their counts sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Item type identifier.
    pub item: GameId,
    /// Structured tag payload, if the stack carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Value>,
    /// Host-resolved display name, used for search and tooltips.
    pub display_name: String,
    /// Total number of items seen.
    pub count: u64,
}

impl StackEntry {
    /// Create an untagged entry.
    pub fn new(item: GameId, display_name: impl Into<String>, count: u64) -> Self {
        Self {
            item,
            tag: None,
            display_name: display_name.into(),
            count,
        }
    }

    /// Create an entry carrying a tag payload.
    pub fn with_tag(
        item: GameId,
        tag: Value,
        display_name: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            item,
            tag: Some(tag),
            display_name: display_name.into(),
            count,
        }
    }

    /// Whether `other` is the same multiset element (same item and tag).
    ///
    /// Display name and count are not part of identity.
    pub fn same_identity(&self, other: &StackEntry) -> bool {
        self.item == other.item && self.tag == other.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(path: &str) -> GameId {
        GameId::parse(path).unwrap()
    }

    #[test]
    fn identity_ignores_name_and_count() {
        let a = StackEntry::new(id("iron_ingot"), "Iron Ingot", 5);
        let b = StackEntry::new(id("iron_ingot"), "Renamed Ingot", 99);
        assert!(a.same_identity(&b));
    }

    #[test]
    fn tag_is_part_of_identity() {
        let plain = StackEntry::new(id("sword"), "Sword", 1);
        let tagged = StackEntry::with_tag(id("sword"), json!({"sharpness": 3}), "Sword", 1);
        let tagged_same = StackEntry::with_tag(id("sword"), json!({"sharpness": 3}), "Sword", 2);
        assert!(!plain.same_identity(&tagged));
        assert!(tagged.same_identity(&tagged_same));
    }

    #[test]
    fn serde_round_trip() {
        let entry = StackEntry::with_tag(id("helm"), json!({"trim": "silver"}), "Shiny Helm", 3);
        let text = serde_json::to_string(&entry).unwrap();
        let back: StackEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(entry, back);
    }
}
