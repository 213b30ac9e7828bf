//! Connector bookkeeping for nested entries

const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";

/// Last-sibling flags of every ancestor between the root and the directory
/// being listed.
///
/// A value is never mutated by the walker; descending builds a new one, so
/// one sibling's subtree cannot leak state into the next sibling's line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branches {
    last_flags: Vec<bool>,
}

impl Branches {
    /// Branches of the traversal root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Depth of the directory being listed; the root is 0.
    pub fn depth(&self) -> usize {
        self.last_flags.len()
    }

    pub fn last_flags(&self) -> &[bool] {
        &self.last_flags
    }

    /// Branches for the children of an entry listed under `self`.
    pub fn descend(&self, is_last: bool) -> Self {
        let mut last_flags = Vec::with_capacity(self.last_flags.len() + 1);
        last_flags.extend_from_slice(&self.last_flags);
        last_flags.push(is_last);
        Self { last_flags }
    }

    /// Prefix for an entry listed under `self`: one continuation segment
    /// per ancestor, then the entry's own connector.
    pub fn prefix(&self, is_last: bool) -> String {
        let mut prefix = String::with_capacity((self.depth() + 1) * TEE.len());
        for &ancestor_last in &self.last_flags {
            prefix.push_str(if ancestor_last { BLANK } else { CONTINUE });
        }
        prefix.push_str(if is_last { ELBOW } else { TEE });
        prefix
    }
}
