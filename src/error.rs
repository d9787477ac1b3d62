//! Error type shared by every tree backend.

use std::io;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Failure raised while rendering a tree.
///
/// Enumeration failures of any kind (missing root, permission denied, a
/// backend I/O fault) all surface as [`TreeError::Traversal`]; the original
/// `io::Error` is kept untouched as the source.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Walking the tree failed at `path`.
    #[error("failed to walk {path}")]
    Traversal {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write.
    #[error("failed to write tree output")]
    Output(#[source] io::Error),
}

impl TreeError {
    pub(crate) fn traversal(path: impl Into<String>, source: io::Error) -> Self {
        TreeError::Traversal {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            TreeError::Traversal { source, .. } => source,
            TreeError::Output(source) => source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }
}

impl From<TreeError> for io::Error {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::Traversal { source, .. } => source,
            TreeError::Output(source) => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_message_names_path() {
        let err = TreeError::traversal("missing", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "failed to walk missing");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn converts_back_to_source_error() {
        let err = TreeError::traversal("x", io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(io_err.to_string(), "nope");
    }
}
