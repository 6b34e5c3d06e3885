//! Overview - an annotated directory listing that guesses what each file is for

pub mod classify;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::{FALLBACK_LABEL, RULES, Rule, classify};
pub use output::{OutputConfig, StreamingFormatter, render_overview};
pub use tree::{DirectoryEntry, OverviewWalker, SKIP_DIRS, StreamingOutput, WalkerConfig};
