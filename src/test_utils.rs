//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Paths passed to the `add_*` methods are relative to the root. The tree is
/// removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing at `target`.
    ///
    /// `target` is stored verbatim, so relative targets resolve against the
    /// link's own directory.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Build `width` directories per level, `depth` levels deep, each
    /// holding `files` files.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        fn fill(dir: &Path, width: usize, depth: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{}.txt", f)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                let sub = dir.join(format!("dir_{}", d));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }
        fill(self.dir.path(), width, depth, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
