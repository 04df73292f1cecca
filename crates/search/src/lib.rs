#![warn(missing_docs)]
//! Search, filtering, and display ordering for remembered item stacks.

pub mod autocomplete;
pub mod pipeline;
pub mod predicate;

pub use autocomplete::suggest;
pub use pipeline::{filter, needs_scroll, snapshot, FilterCache};
pub use predicate::matches;
