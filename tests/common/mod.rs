#![allow(dead_code)]

use glyphtree::backend::{Backend, MapFs, MemFs, OpenFs};
use glyphtree::{print_tree, print_tree_fs, print_tree_with, TreeError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The tree every backend is checked against:
/// `file1.txt`, `subdir1/file2.txt` and an empty `subdir2`.
pub const SCENARIO: &[&str] = &["file1.txt", "subdir1/", "subdir1/file2.txt", "subdir2/"];

pub const SCENARIO_OUTPUT: &str = "\
├── 📄 file1.txt
├── 📁 subdir1
│   ├── 📄 file2.txt
├── 📁 subdir2
";

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Same layout as [`create_fixture`], under `root` of a [`MemFs`].
pub fn mem_fixture(root: &str, paths: &[&str]) -> MemFs {
    let mut fs = MemFs::new();
    fs.mkdir_all(root).unwrap();
    for p in paths {
        let full = format!("{}/{}", root.trim_end_matches('/'), p);
        if p.ends_with('/') {
            fs.mkdir_all(&full).unwrap();
        } else {
            fs.write_file(&full, "test content").unwrap();
        }
    }
    fs
}

/// Same layout as [`create_fixture`], rooted at `.` of a [`MapFs`].
pub fn map_fixture(paths: &[&str]) -> MapFs {
    let mut fsys = MapFs::new();
    for p in paths {
        match p.strip_suffix('/') {
            Some(dir) => fsys.insert_dir(dir),
            None => fsys.insert_file(p, "test content"),
        }
    }
    fsys
}

pub fn render_os(root: &Path) -> (String, Result<(), TreeError>) {
    let mut buf = Vec::new();
    let result = print_tree(&mut buf, root);
    (String::from_utf8(buf).unwrap(), result)
}

pub fn render_backend<B: Backend>(backend: &B, root: &str) -> (String, Result<(), TreeError>) {
    let mut buf = Vec::new();
    let result = print_tree_with(&mut buf, backend, root);
    (String::from_utf8(buf).unwrap(), result)
}

pub fn render_open<F: OpenFs>(fsys: F, root: &str) -> (String, Result<(), TreeError>) {
    let mut buf = Vec::new();
    let result = print_tree_fs(&mut buf, fsys, root);
    (String::from_utf8(buf).unwrap(), result)
}

/// Depth encoded in a rendered line: number of leading indent markers.
pub fn line_depth(line: &str) -> usize {
    let mut depth = 0;
    let mut rest = line;
    while let Some(stripped) = rest.strip_prefix("│   ") {
        depth += 1;
        rest = stripped;
    }
    depth
}
