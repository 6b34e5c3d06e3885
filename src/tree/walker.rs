//! OverviewWalker - depth-first walk that streams entries as it goes

use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::DirectoryEntry;
use super::traversal::read_sorted_entries;

/// Callback for streaming output - receives each entry as it is visited.
pub trait StreamingOutput {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()>;
}

/// Recursive walker. Holds no state between walks, so walking the same
/// unchanged tree twice produces the same sequence of entries.
pub struct OverviewWalker {
    config: WalkerConfig,
}

impl OverviewWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the children of `root` and stream them - returns (dir_count, file_count).
    ///
    /// `root` itself is not emitted. Each entry reaches `output` before the
    /// walker looks below it. A directory that cannot be listed stops the
    /// walk, and whatever was already handed to `output` stays there.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<(usize, usize)> {
        let mut counts = (0, 0);
        self.walk_dir(root, root, 0, output, &mut counts)?;
        Ok(counts)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        root: &Path,
        depth: usize,
        output: &mut O,
        counts: &mut (usize, usize),
    ) -> io::Result<()> {
        for entry in read_sorted_entries(path, root, &self.config)? {
            output.output_entry(&entry, depth)?;
            if entry.is_dir {
                counts.0 += 1;
                self.walk_dir(&entry.path, root, depth + 1, output, counts)?;
            } else {
                counts.1 += 1;
            }
        }
        Ok(())
    }
}

impl Default for OverviewWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
