//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which walks a directory and
//! collects the whole tree into a string.

use std::path::Path;

use termcolor::Buffer;

use crate::error::Result;
use crate::tree::TreeWalker;

use super::config::OutputConfig;
use super::streaming::StreamingFormatter;

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Names that are not valid UTF-8 are converted lossily; use
    /// `StreamingFormatter` when exact bytes matter.
    pub fn format(&self, walker: &TreeWalker, root: &Path) -> Result<String> {
        let buffer = if self.config.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        let mut formatter = StreamingFormatter::new(self.config, buffer);
        walker.walk(root, &mut formatter)?;
        Ok(String::from_utf8_lossy(formatter.into_inner().as_slice()).into_owned())
    }
}
