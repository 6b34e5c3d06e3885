//! Overview formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `streaming` - Line-at-a-time formatter for any `io::Write`

mod config;
mod streaming;

use std::io;
use std::path::Path;

use crate::tree::{OverviewWalker, WalkerConfig};

// Re-export public types and functions
pub use config::{DEFAULT_TITLE, OutputConfig};
pub use streaming::{ARROW, FILE_MARKER, FOLDER_MARKER, StreamingFormatter};

/// Walk `root` and return the whole overview, header included, as a string.
pub fn render_overview(root: &Path, config: WalkerConfig) -> io::Result<String> {
    let mut formatter = StreamingFormatter::new(OutputConfig::default(), Vec::new());
    formatter.write_header()?;
    OverviewWalker::new(config).walk_streaming(root, &mut formatter)?;
    String::from_utf8(formatter.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
