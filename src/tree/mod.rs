//! Directory tree walking logic
//!
//! - `lister`: reads one directory and puts its children in display order
//! - `branches`: connector state carried from a directory to its children
//! - `walker`: depth-first recursion that streams one line per entry

mod branches;
mod config;
mod entry;
mod lister;
mod walker;

pub use branches::Branches;
pub use config::WalkerConfig;
pub use entry::Entry;
pub use lister::list_entries;
pub use walker::{TreeLine, TreeOutput, TreeWalker, WalkSummary};
