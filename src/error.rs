//! Error types for twig

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a run.
///
/// Unreadable directories and dangling symlinks found during traversal are
/// not errors: the walker renders them and keeps going.
#[derive(Debug, Error)]
pub enum TwigError {
    /// The starting path does not exist.
    #[error("cannot access '{}': No such file or directory", path.display())]
    PathNotFound { path: PathBuf },

    /// Writing a tree line failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TwigError {
    /// True when stdout was closed by the reader (e.g. `twig | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TwigError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, TwigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = TwigError::PathNotFound {
            path: PathBuf::from("missing/dir"),
        };
        assert_eq!(
            err.to_string(),
            "cannot access 'missing/dir': No such file or directory"
        );
    }

    #[test]
    fn test_broken_pipe_detection() {
        let pipe: TwigError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(pipe.is_broken_pipe());

        let other: TwigError = io::Error::from(io::ErrorKind::PermissionDenied).into();
        assert!(!other.is_broken_pipe());

        let missing = TwigError::PathNotFound {
            path: PathBuf::from("x"),
        };
        assert!(!missing.is_broken_pipe());
    }
}
