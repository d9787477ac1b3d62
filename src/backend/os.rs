use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Backend, DirEntry, EntryKind};

/// [`Backend`] over the real disk.
///
/// Symlinks are classified by their own type and never followed.
#[derive(Debug, Clone, Default)]
pub struct OsFs {
    base: Option<PathBuf>,
}

impl OsFs {
    /// Resolve paths against the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every path beneath `base`, including rooted ones.
    pub fn rooted(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = if path.is_empty() { "." } else { path };
        match &self.base {
            Some(base) => base.join(path.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    }
}

impl Backend for OsFs {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        let meta = fs::symlink_metadata(self.resolve(path))?;
        Ok(kind_of(meta.file_type()))
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let dir: PathBuf = self.resolve(path);
        read_entries(&dir)
    }
}

fn read_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        entries.push(DirEntry::new(name, kind_of(entry.file_type()?)));
    }
    Ok(entries)
}
