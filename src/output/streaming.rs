//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each entry as soon
//! as the walker reports it, for use with `OverviewWalker`.

use std::io::{self, Write};

use crate::classify::FALLBACK_LABEL;
use crate::tree::{DirectoryEntry, StreamingOutput};

use super::config::OutputConfig;

pub const FOLDER_MARKER: &str = "📁";
pub const FILE_MARKER: &str = "📄";

/// Separator between a file name and its description.
pub const ARROW: &str = " → ";

/// Streaming output formatter - writes lines straight to `W` without buffering
/// the tree. Implements the StreamingOutput trait for use with OverviewWalker.
pub struct StreamingFormatter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Write the title line followed by a blank line.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.config.title)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        let indent = self.config.indent(depth);
        if entry.is_dir {
            writeln!(self.out, "{}{} {}/", indent, FOLDER_MARKER, entry.name)
        } else {
            let desc = entry.description.unwrap_or(FALLBACK_LABEL);
            writeln!(
                self.out,
                "{}{} {}{}{}",
                indent, FILE_MARKER, entry.name, ARROW, desc
            )
        }
    }
}
