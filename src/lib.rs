#![forbid(unsafe_code)]
//! Glyph-decorated directory trees from real, virtual or open-only
//! filesystems.

pub mod backend;
pub mod cli;
pub mod error;
pub mod render;
pub mod tree;

pub use error::{Result, TreeError};
pub use render::{print_tree, print_tree_fs, print_tree_with, TreeRenderer};
