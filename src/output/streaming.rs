//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line
//! as soon as the walker visits it, for use with `TreeWalker`.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeLine, TreeOutput};

use super::config::OutputConfig;

/// Writes tree lines to any `WriteColor` sink without buffering the tree.
pub struct StreamingFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_prefix(&mut self, prefix: &str, is_dir: bool) -> io::Result<()> {
        if is_dir && self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", prefix)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", prefix)?;
        }
        Ok(())
    }

    /// Names and paths are written byte for byte, never lossily.
    fn write_raw(&mut self, text: &OsStr) -> io::Result<()> {
        self.out.write_all(text.as_encoded_bytes())
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        self.write_raw(root.as_os_str())?;
        writeln!(self.out)
    }

    fn output_entry(&mut self, line: &TreeLine<'_>) -> io::Result<()> {
        self.write_prefix(line.prefix, line.is_dir)?;
        self.write_raw(line.label)?;
        if let Some(target) = line.link_target {
            write!(self.out, " -> ")?;
            self.write_raw(target)?;
        }
        writeln!(self.out)
    }
}
