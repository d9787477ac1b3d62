//! Writing trees to an output sink.
//!
//! Lines are written as soon as each entry is visited. When a walk fails
//! the lines already written stay in the sink, a diagnostic is logged and
//! the error is handed back to the caller.

use std::io::Write;
use std::path::Path;
use tracing::{debug, error};

use crate::backend::{Backend, OpenFs, OpenFsBackend};
use crate::error::{Result, TreeError};
use crate::tree::{walk_backend, walk_os, Node};

/// Renders directory trees into `W`.
pub struct TreeRenderer<W> {
    out: W,
    lines: usize,
}

impl<W: Write> TreeRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far, across every render call.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the real filesystem below `root`.
    pub fn render_os(&mut self, root: &Path) -> Result<()> {
        let root = if root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            root
        };
        debug!(root = %root.display(), "rendering tree from disk");
        let result = walk_os(root, |node| self.emit(node));
        self.finish(&root.display().to_string(), result)
    }

    /// Render `root` through any [`Backend`].
    pub fn render<B: Backend + ?Sized>(&mut self, backend: &B, root: &str) -> Result<()> {
        let root = if root.is_empty() { "." } else { root };
        debug!(root, "rendering tree from backend");
        let result = walk_backend(backend, root, |node| self.emit(node));
        self.finish(root, result)
    }

    /// Render `root` of an open-only filesystem.
    pub fn render_fs<F: OpenFs>(&mut self, fsys: F, root: &str) -> Result<()> {
        self.render(&OpenFsBackend::new(fsys), root)
    }

    fn emit(&mut self, node: &Node) -> Result<()> {
        self.out
            .write_all(node.line().as_bytes())
            .map_err(TreeError::Output)?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self, root: &str, result: Result<()>) -> Result<()> {
        if let Err(err) = &result {
            error!(root, error = %err, cause = %err.io_error(), "failed to inspect the directory tree");
            return result;
        }
        self.out.flush().map_err(TreeError::Output)?;
        debug!(root, lines = self.lines, "tree rendered");
        Ok(())
    }
}

/// Print the tree below an OS path.
pub fn print_tree<W: Write + ?Sized>(out: &mut W, root: impl AsRef<Path>) -> Result<()> {
    TreeRenderer::new(out).render_os(root.as_ref())
}

/// Print the tree below `root` of a virtual or adapted [`Backend`].
pub fn print_tree_with<W, B>(out: &mut W, backend: &B, root: &str) -> Result<()>
where
    W: Write + ?Sized,
    B: Backend + ?Sized,
{
    TreeRenderer::new(out).render(backend, root)
}

/// Print the tree below `root` of an [`OpenFs`].
pub fn print_tree_fs<W, F>(out: &mut W, fsys: F, root: &str) -> Result<()>
where
    W: Write + ?Sized,
    F: OpenFs,
{
    TreeRenderer::new(out).render_fs(fsys, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MapFs, MemFs};
    use std::io;

    fn scenario() -> MemFs {
        let mut fs = MemFs::new();
        fs.mkdir_all("testdir/subdir1").unwrap();
        fs.mkdir_all("testdir/subdir2").unwrap();
        fs.write_file("testdir/file1.txt", "test content").unwrap();
        fs.write_file("testdir/subdir1/file2.txt", "test content").unwrap();
        fs
    }

    #[test]
    fn renders_exact_lines_in_lexical_order() {
        let mut buf = Vec::new();
        print_tree_with(&mut buf, &scenario(), "testdir").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "├── 📄 file1.txt\n\
             ├── 📁 subdir1\n\
             │   ├── 📄 file2.txt\n\
             ├── 📁 subdir2\n"
        );
    }

    #[test]
    fn empty_root_means_top() {
        let fsys = MapFs::new().with_file("only.txt", "");
        let mut buf = Vec::new();
        print_tree_fs(&mut buf, &fsys, "").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "├── 📄 only.txt\n");
    }

    #[test]
    fn renderer_counts_lines() {
        let mut renderer = TreeRenderer::new(Vec::new());
        renderer.render(&scenario(), "testdir").unwrap();
        assert_eq!(renderer.lines_written(), 4);
        assert_eq!(renderer.into_inner().iter().filter(|b| **b == b'\n').count(), 4);
    }

    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_are_output_errors() {
        let err = print_tree_with(&mut FullSink, &scenario(), "testdir").unwrap_err();
        assert!(matches!(err, TreeError::Output(_)));
    }
}
