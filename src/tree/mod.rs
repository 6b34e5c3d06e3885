//! Directory tree walking logic
//!
//! `OverviewWalker` visits a tree depth-first in name order and hands each
//! entry to a `StreamingOutput` as soon as it is seen, so nothing beyond
//! the current path is kept in memory.

mod config;
mod entry;
mod traversal;
mod walker;

// Re-export public types
pub use config::{SKIP_DIRS, WalkerConfig};
pub use entry::DirectoryEntry;
pub use traversal::read_sorted_entries;
pub use walker::{OverviewWalker, StreamingOutput};
