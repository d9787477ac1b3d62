use std::io;
use std::path::Path;
use walkdir::WalkDir;

use super::layout::{base_name, join, native_depth, SlashDepth};
use super::Node;
use crate::backend::Backend;
use crate::error::{Result, TreeError};

/// Walk the real filesystem below `root` in lexical order.
///
/// Symlinks are reported but never followed. The first walk error aborts.
pub fn walk_os<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Node) -> Result<()>,
{
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry_result in walker {
        let entry = entry_result.map_err(|e| walk_error(root, e))?;
        // Skip root itself
        if entry.depth() == 0 {
            continue;
        }

        let node = Node {
            path: entry.path().to_string_lossy().to_string(),
            name: entry.file_name().to_string_lossy().to_string(),
            depth: native_depth(root, entry.path()),
            is_dir: entry.file_type().is_dir(),
        };
        visit(&node)?;
    }
    Ok(())
}

fn walk_error(root: &Path, err: walkdir::Error) -> TreeError {
    let path = err.path().unwrap_or(root).display().to_string();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    TreeError::traversal(path, source)
}

/// Pre-order walk over any [`Backend`], children sorted by name.
///
/// A root that is not a directory yields no nodes.
pub fn walk_backend<B, F>(backend: &B, root: &str, mut visit: F) -> Result<()>
where
    B: Backend + ?Sized,
    F: FnMut(&Node) -> Result<()>,
{
    let kind = backend
        .stat(root)
        .map_err(|e| TreeError::traversal(root, e))?;
    if !kind.is_dir() {
        return Ok(());
    }
    let depth = SlashDepth::new(root);
    walk_dir(backend, root, depth, &mut visit)
}

fn walk_dir<B, F>(backend: &B, dir: &str, depth: SlashDepth, visit: &mut F) -> Result<()>
where
    B: Backend + ?Sized,
    F: FnMut(&Node) -> Result<()>,
{
    let mut entries = backend
        .read_dir(dir)
        .map_err(|e| TreeError::traversal(dir, e))?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        let path = join(dir, &entry.name);
        let node = Node {
            name: base_name(&path).to_string(),
            depth: depth.of(&path),
            is_dir: entry.is_dir(),
            path,
        };
        visit(&node)?;
        if node.is_dir {
            walk_dir(backend, &node.path, depth, visit)?;
        }
    }
    Ok(())
}
