//! Minimal read-only filesystem exposing nothing but `open`.
//!
//! Listing and stat are derived from the opened handle, so any type that can
//! open a name gets the full walker through [`OpenFsBackend`].

use std::collections::BTreeMap;
use std::io::{self, ErrorKind};

use super::{Backend, DirEntry, EntryKind};
use crate::tree::layout::base_name;

/// Metadata reported by an opened handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
}

impl FileInfo {
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// An opened file or directory.
pub trait FsFile {
    fn stat(&self) -> io::Result<FileInfo>;

    /// Directory children; fails on anything that is not a directory.
    fn read_dir(&mut self) -> io::Result<Vec<DirEntry>>;
}

/// A filesystem whose only primitive is `open`.
///
/// Names are unrooted slash paths; `"."` is the top.
pub trait OpenFs {
    fn open(&self, name: &str) -> io::Result<Box<dyn FsFile + '_>>;
}

impl<F: OpenFs + ?Sized> OpenFs for &F {
    fn open(&self, name: &str) -> io::Result<Box<dyn FsFile + '_>> {
        (**self).open(name)
    }
}

/// Whether `name` is acceptable to [`OpenFs::open`]: unrooted, no empty,
/// `.` or `..` segments, except the lone top `"."`.
pub fn valid_path(name: &str) -> bool {
    if name == "." {
        return true;
    }
    !name.is_empty()
        && name
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

fn check_name(name: &str) -> io::Result<()> {
    if valid_path(name) {
        Ok(())
    } else {
        Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("{name}: invalid argument"),
        ))
    }
}

/// Open `name` and report its metadata.
pub fn stat<F: OpenFs + ?Sized>(fsys: &F, name: &str) -> io::Result<FileInfo> {
    check_name(name)?;
    let file = fsys.open(name)?;
    file.stat()
}

/// Open `name` and list its children sorted by name.
pub fn read_dir<F: OpenFs + ?Sized>(fsys: &F, name: &str) -> io::Result<Vec<DirEntry>> {
    check_name(name)?;
    let mut file = fsys.open(name)?;
    let mut entries = file.read_dir()?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Adapts an [`OpenFs`] into a [`Backend`].
#[derive(Debug, Clone)]
pub struct OpenFsBackend<F> {
    fsys: F,
}

impl<F: OpenFs> OpenFsBackend<F> {
    pub fn new(fsys: F) -> Self {
        Self { fsys }
    }

    pub fn into_inner(self) -> F {
        self.fsys
    }
}

fn top_or(path: &str) -> &str {
    if path.is_empty() {
        "."
    } else {
        path
    }
}

impl<F: OpenFs> Backend for OpenFsBackend<F> {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        stat(&self.fsys, top_or(path)).map(|info| info.kind)
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        read_dir(&self.fsys, top_or(path))
    }
}

#[derive(Debug, Clone)]
struct MapFile {
    data: Vec<u8>,
    is_dir: bool,
}

/// Map-backed [`OpenFs`] for tests and fixtures.
///
/// Only leaf paths need to be inserted; parent directories are implied.
#[derive(Debug, Clone, Default)]
pub struct MapFs {
    files: BTreeMap<String, MapFile>,
}

impl MapFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, name: &str, data: impl AsRef<[u8]>) {
        self.files.insert(
            name.to_string(),
            MapFile {
                data: data.as_ref().to_vec(),
                is_dir: false,
            },
        );
    }

    /// Record an explicit, possibly empty, directory.
    pub fn insert_dir(&mut self, name: &str) {
        self.files.insert(
            name.to_string(),
            MapFile {
                data: Vec::new(),
                is_dir: true,
            },
        );
    }

    pub fn with_file(mut self, name: &str, data: impl AsRef<[u8]>) -> Self {
        self.insert_file(name, data);
        self
    }

    pub fn with_dir(mut self, name: &str) -> Self {
        self.insert_dir(name);
        self
    }

    fn children(&self, name: &str) -> BTreeMap<String, EntryKind> {
        let prefix = if name == "." {
            String::new()
        } else {
            format!("{name}/")
        };
        let mut children = BTreeMap::new();
        for (key, file) in self.files.range(prefix.clone()..) {
            let Some(rest) = key.strip_prefix(&prefix) else {
                break;
            };
            if rest.is_empty() {
                continue;
            }
            let (child, kind) = match rest.split_once('/') {
                Some((child, _)) => (child, EntryKind::Dir),
                None if file.is_dir => (rest, EntryKind::Dir),
                None => (rest, EntryKind::File),
            };
            let slot = children.entry(child.to_string()).or_insert(kind);
            if kind.is_dir() {
                *slot = EntryKind::Dir;
            }
        }
        children
    }
}

impl OpenFs for MapFs {
    fn open(&self, name: &str) -> io::Result<Box<dyn FsFile + '_>> {
        check_name(name)?;

        if let Some(file) = self.files.get(name).filter(|f| !f.is_dir) {
            return Ok(Box::new(MapHandle {
                info: FileInfo {
                    name: base_name(name).to_string(),
                    kind: EntryKind::File,
                    size: file.data.len() as u64,
                },
                entries: None,
            }));
        }

        let children = self.children(name);
        if children.is_empty() && name != "." && !self.files.contains_key(name) {
            return Err(io::Error::new(
                ErrorKind::NotFound,
                format!("open {name}: file does not exist"),
            ));
        }
        Ok(Box::new(MapHandle {
            info: FileInfo {
                name: base_name(name).to_string(),
                kind: EntryKind::Dir,
                size: 0,
            },
            entries: Some(
                children
                    .into_iter()
                    .map(|(name, kind)| DirEntry::new(name, kind))
                    .collect(),
            ),
        }))
    }
}

struct MapHandle {
    info: FileInfo,
    entries: Option<Vec<DirEntry>>,
}

impl FsFile for MapHandle {
    fn stat(&self) -> io::Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn read_dir(&mut self) -> io::Result<Vec<DirEntry>> {
        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(io::Error::other(format!(
                "{}: not a directory",
                self.info.name
            ))),
        }
    }
}
