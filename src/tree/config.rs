//! Configuration types for the overview walker

/// Directory names that are never listed or descended into.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".next", ".vercel", "__pycache__"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories with these exact names are omitted along with their subtree.
    /// Files that happen to share a name are still listed.
    pub skip_dirs: &'static [&'static str],
}

impl WalkerConfig {
    /// Check if a directory name is in the skip set.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_dirs.contains(&name)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_dirs: SKIP_DIRS,
        }
    }
}
