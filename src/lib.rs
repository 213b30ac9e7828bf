//! Twig - print a directory as a connected tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TwigError};
pub use output::{OutputConfig, StreamingFormatter, TreeFormatter};
pub use tree::{
    Branches, Entry, TreeLine, TreeOutput, TreeWalker, WalkSummary, WalkerConfig, list_entries,
};
