//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Skip everything that is not a directory
    pub dirs_only: bool,
    /// Print each entry as a path joined from the traversal root
    pub full_path: bool,
    /// Number of levels below the root to show. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// Whether a directory at `depth` (root = 0) is too deep to be listed.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
