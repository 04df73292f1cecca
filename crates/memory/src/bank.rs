//! In-memory remembered-contents store for one save/server.
//!
//! A bank maps location keys (per-dimension or per-coordinate, the host
//! decides the granularity) to a ledger of coalesced item stacks. How a
//! bank gets to disk is the host's business, behind [`crate::MemoryStore`].

use serde::{Deserialize, Serialize};
use stashtrack_core::{GameId, SessionContext, StackEntry};
use std::collections::HashMap;
use tracing::debug;

const NO_ENTRIES: &[StackEntry] = &[];

/// User-editable facts about a bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankMetadata {
    /// Name shown in bank management UIs; defaults to the session's.
    pub display_name: Option<String>,
}

/// Coalesced multiset of remembered stacks at one location.
///
/// Entries keep first-seen order; recording the same identity again adds
/// to its count instead of appending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentsLedger {
    entries: Vec<StackEntry>,
}

impl ContentsLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stack, coalescing with an existing entry of the same
    /// identity (item id plus tag).
    pub fn add(&mut self, stack: StackEntry) {
        match self.entries.iter_mut().find(|e| e.same_identity(&stack)) {
            Some(existing) => existing.count += stack.count,
            None => self.entries.push(stack),
        }
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all remembered counts.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl FromIterator<StackEntry> for ContentsLedger {
    fn from_iter<T: IntoIterator<Item = StackEntry>>(iter: T) -> Self {
        let mut ledger = ContentsLedger::new();
        for stack in iter {
            ledger.add(stack);
        }
        ledger
    }
}

/// Remembered container contents for one save/server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryBank {
    id: String,
    metadata: BankMetadata,
    locations: HashMap<GameId, ContentsLedger>,
    /// Location keys in the order they were first recorded.
    key_order: Vec<GameId>,
}

impl MemoryBank {
    /// Fresh bank for a session.
    pub fn new(session: &SessionContext) -> Self {
        Self {
            id: session.id.clone(),
            metadata: BankMetadata {
                display_name: Some(session.display_name.clone()),
            },
            locations: HashMap::new(),
            key_order: Vec::new(),
        }
    }

    /// Stable bank identifier (derived from the session).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bank metadata.
    pub fn metadata(&self) -> &BankMetadata {
        &self.metadata
    }

    /// Mutable bank metadata.
    pub fn metadata_mut(&mut self) -> &mut BankMetadata {
        &mut self.metadata
    }

    /// Replace metadata wholesale (management view save path).
    pub fn set_metadata(&mut self, metadata: BankMetadata) {
        self.metadata = metadata;
    }

    /// Replace the remembered stacks at `location` with a fresh
    /// observation. Recording nothing forgets the location entirely.
    pub fn record(&mut self, location: GameId, stacks: impl IntoIterator<Item = StackEntry>) {
        let ledger: ContentsLedger = stacks.into_iter().collect();
        if ledger.is_empty() {
            self.remove(&location);
            return;
        }
        debug!(%location, distinct = ledger.len(), "recorded container contents");
        if !self.locations.contains_key(&location) {
            self.key_order.push(location.clone());
        }
        self.locations.insert(location, ledger);
    }

    /// Coalesced counts remembered at `location`, first-seen order.
    /// Unknown locations yield an empty slice, not an error.
    pub fn counts(&self, location: &GameId) -> &[StackEntry] {
        self.locations
            .get(location)
            .map(|ledger| ledger.entries())
            .unwrap_or(NO_ENTRIES)
    }

    /// Location keys in first-recorded order.
    pub fn keys(&self) -> &[GameId] {
        &self.key_order
    }

    /// Forget everything remembered at `location`. Returns whether the
    /// location was known.
    pub fn remove(&mut self, location: &GameId) -> bool {
        let removed = self.locations.remove(location).is_some();
        if removed {
            self.key_order.retain(|key| key != location);
        }
        removed
    }
}
