//! Staged-mutation view of a bank for management screens.
//!
//! Edits made in a management UI (rename the bank, forget locations) are
//! staged against a metadata copy and only hit the bank when the user
//! saves; backing out discards them.

use crate::bank::{BankMetadata, MemoryBank};
use crate::MemoryStore;
use anyhow::Result;
use stashtrack_core::GameId;
use tracing::debug;

/// A bank being edited in a management screen.
#[derive(Debug)]
pub struct BankView<'a> {
    bank: &'a mut MemoryBank,
    metadata: BankMetadata,
    to_remove: Vec<GameId>,
}

impl<'a> BankView<'a> {
    /// Start editing `bank`.
    pub fn new(bank: &'a mut MemoryBank) -> Self {
        let metadata = bank.metadata().clone();
        Self {
            bank,
            metadata,
            to_remove: Vec::new(),
        }
    }

    /// Bank identifier.
    pub fn id(&self) -> &str {
        self.bank.id()
    }

    /// The staged metadata copy.
    pub fn metadata(&self) -> &BankMetadata {
        &self.metadata
    }

    /// Mutable access to the staged metadata copy.
    pub fn metadata_mut(&mut self) -> &mut BankMetadata {
        &mut self.metadata
    }

    /// Location keys as they would look after a save: bank order with
    /// staged removals filtered out.
    pub fn keys(&self) -> Vec<GameId> {
        self.bank
            .keys()
            .iter()
            .filter(|key| !self.to_remove.contains(*key))
            .cloned()
            .collect()
    }

    /// Stage a location for removal. The bank is untouched until save.
    pub fn remove_key(&mut self, location: &GameId) {
        if !self.to_remove.contains(location) {
            self.to_remove.push(location.clone());
        }
    }

    /// Apply staged edits to the bank and persist it.
    pub fn save(self, store: &mut dyn MemoryStore) -> Result<()> {
        debug!(
            bank = self.bank.id(),
            removed = self.to_remove.len(),
            "saving bank management edits"
        );
        for key in &self.to_remove {
            self.bank.remove(key);
        }
        self.bank.set_metadata(self.metadata);
        store.save(self.bank)
    }
}
