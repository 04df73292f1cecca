#![warn(missing_docs)]
//! Remembered-contents memory banks, one per save/server.

pub mod bank;
pub mod view;

use anyhow::Result;

pub use bank::{BankMetadata, ContentsLedger, MemoryBank};
pub use view::BankView;

/// Persistence boundary for memory banks.
///
/// The on-disk format belongs to the host; this core only decides when a
/// bank is worth saving.
pub trait MemoryStore {
    /// Persist the bank.
    fn save(&mut self, bank: &MemoryBank) -> Result<()>;
}
