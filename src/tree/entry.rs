//! Directory entries as seen by the walker

use std::path::{Path, PathBuf};

use crate::classify::classify;

/// One listed child of a directory.
///
/// Built when its parent is read and dropped once printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Classifier label; `None` for directories.
    pub description: Option<&'static str>,
}

impl DirectoryEntry {
    /// Describe `path`, a descendant of the walk `root`.
    ///
    /// Symlinks are followed, so a link to a directory is a directory. Anything
    /// that cannot be stat'ed as a directory, a dangling link included, is
    /// listed as a file. The classifier sees the path relative to `root`, so
    /// directories above the walk never affect a label.
    pub fn from_path(path: &Path, root: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let is_dir = path.is_dir();
        let description = if is_dir {
            None
        } else {
            let relative = path.strip_prefix(root).unwrap_or(path);
            Some(classify(&name, relative))
        };

        Self {
            name,
            path: path.to_path_buf(),
            is_dir,
            description,
        }
    }
}
