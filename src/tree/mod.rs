//! Traversal and line layout.

pub mod layout;
mod walk;

pub use layout::{format_line, native_depth, SlashDepth};
pub use walk::{walk_backend, walk_os};

/// One entry visited by a walk. The root itself is never visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Path as produced by the walk (includes the root).
    pub path: String,
    /// Display name (final path component only).
    pub name: String,
    /// Levels below the root (0 = direct child of root).
    pub depth: usize,
    pub is_dir: bool,
}

impl Node {
    pub fn line(&self) -> String {
        format_line(self.depth, self.is_dir, &self.name)
    }
}
