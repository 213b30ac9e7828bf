//! A single child of a listed directory

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// A named child of a directory.
///
/// Only the name and path are stored. Everything else is asked of the
/// filesystem each time, so two calls may disagree if the tree changes
/// underneath us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: OsString,
    path: PathBuf,
}

impl Entry {
    pub fn new(parent: &Path, name: OsString) -> Self {
        let path = parent.join(&name);
        Self { name, path }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().starts_with(b".")
    }

    /// Follows symlinks: a link to a directory counts as a directory.
    pub fn is_dir(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.is_dir())
    }

    /// Never follows symlinks.
    pub fn is_symlink(&self) -> bool {
        fs::symlink_metadata(&self.path).is_ok_and(|m| m.file_type().is_symlink())
    }

    /// The link target, resolved one level. `None` if it cannot be read.
    pub fn symlink_target(&self) -> Option<PathBuf> {
        fs::read_link(&self.path).ok()
    }

    /// Whether the walker may descend into this entry.
    pub fn is_traversable(&self) -> bool {
        self.is_dir() && !self.is_symlink()
    }
}
