//! Filesystem capabilities the tree walker can run on.
//!
//! Every backend speaks slash-delimited paths. `""` and `"."` both name the
//! backend's top directory.

mod memory;
pub mod open;
mod os;

use std::io;

pub use memory::MemFs;
pub use open::{FileInfo, FsFile, MapFs, OpenFs, OpenFsBackend};
pub use os::OsFs;

/// Whether an entry is a directory or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Dir
    }
}

/// One child reported by [`Backend::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path segment.
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// The two primitives the walker needs: stat an entry, list a directory.
pub trait Backend {
    fn stat(&self, path: &str) -> io::Result<EntryKind>;

    /// Children of `path` in any order; the walker sorts them.
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        (**self).stat(path)
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}
