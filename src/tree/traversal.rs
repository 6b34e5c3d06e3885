//! Directory listing shared by the walker.

use std::fs;
use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::DirectoryEntry;

/// Read, sort, and filter the immediate children of `path`, a directory at or
/// below the walk `root`.
///
/// Children are ordered by raw file name. Directories in the skip set are
/// dropped here so nothing below them is ever read. Only listing `path` can
/// fail; describing a child never does.
pub fn read_sorted_entries(
    path: &Path,
    root: &Path,
    config: &WalkerConfig,
) -> io::Result<Vec<DirectoryEntry>> {
    let mut children = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    children.sort_by_key(|a| a.file_name());

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        let entry = DirectoryEntry::from_path(&child.path(), root);
        if entry.is_dir && config.is_skipped(&entry.name) {
            log::debug!("skipping {}", entry.path.display());
            continue;
        }
        entries.push(entry);
    }

    Ok(entries)
}
