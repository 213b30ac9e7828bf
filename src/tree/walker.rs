//! TreeWalker - depth-first traversal that streams one line per entry

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TwigError};

use super::branches::Branches;
use super::config::WalkerConfig;
use super::entry::Entry;
use super::lister::list_entries;

/// One rendered tree entry, handed to a [`TreeOutput`] as it is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    /// Connector glyphs, e.g. `"│   └── "`.
    pub prefix: &'a str,
    /// Raw name, or the path joined from the root in full-path mode.
    pub label: &'a OsStr,
    /// Set for symlinks. Empty when the link could not be read.
    pub link_target: Option<&'a OsStr>,
    /// Classification following symlinks.
    pub is_dir: bool,
}

/// Callback for streaming output.
pub trait TreeOutput {
    fn output_root(&mut self, root: &Path) -> io::Result<()>;

    fn output_entry(&mut self, line: &TreeLine<'_>) -> io::Result<()>;
}

/// Counts gathered during a walk. Not part of the printed tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Directories that could not be opened and were shown as empty.
    pub unreadable_dirs: usize,
}

/// Tree walker that streams lines to an output without building the tree
/// in memory. Uses O(depth) memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Print `root` as given, then every qualifying descendant.
    ///
    /// Fails before writing anything if `root` does not exist.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        if !root.exists() {
            return Err(TwigError::PathNotFound {
                path: root.to_path_buf(),
            });
        }

        output.output_root(root)?;

        let mut summary = WalkSummary::default();
        // A file root has no children; only its own line is printed.
        if root.is_dir() {
            self.walk_dir(root, &Branches::root(), output, &mut summary)?;
        }
        Ok(summary)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        dir: &Path,
        branches: &Branches,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        let depth = branches.depth();
        if self.config.at_max_depth(depth) {
            return Ok(());
        }

        debug!(path = %dir.display(), depth, "listing directory");

        let entries = match list_entries(dir, self.config.show_hidden) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot open directory '{}': {}", dir.display(), e);
                summary.unreadable_dirs += 1;
                return Ok(());
            }
        };

        // Filter before counting so the last displayed sibling gets the elbow.
        let displayed: Vec<(Entry, bool)> = entries
            .into_iter()
            .map(|entry| {
                let is_dir = entry.is_dir();
                (entry, is_dir)
            })
            .filter(|(_, is_dir)| *is_dir || !self.config.dirs_only)
            .collect();

        let total = displayed.len();

        for (i, (entry, is_dir)) in displayed.into_iter().enumerate() {
            let is_last = i + 1 == total;
            let is_symlink = entry.is_symlink();

            let prefix = branches.prefix(is_last);
            let label = if self.config.full_path {
                entry.path().as_os_str()
            } else {
                entry.name()
            };
            let link_target: Option<PathBuf> =
                is_symlink.then(|| entry.symlink_target().unwrap_or_default());

            output.output_entry(&TreeLine {
                prefix: &prefix,
                label,
                link_target: link_target.as_deref().map(Path::as_os_str),
                is_dir,
            })?;

            if is_dir {
                summary.dirs += 1;
            } else {
                summary.files += 1;
            }

            if is_dir && !is_symlink {
                self.walk_dir(entry.path(), &branches.descend(is_last), output, summary)?;
            }
        }

        Ok(())
    }
}
