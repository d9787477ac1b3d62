use std::collections::BTreeMap;
use std::io::{self, ErrorKind};

use super::{Backend, DirEntry, EntryKind};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// Virtual in-memory filesystem.
///
/// Keys are normalized slash paths without a leading `/`; the top
/// directory is the empty key and always exists.
#[derive(Debug, Clone)]
pub struct MemFs {
    nodes: BTreeMap<String, Node>,
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemFs {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(String::new(), Node::Dir);
        Self { nodes }
    }

    /// Create `path` and any missing parents.
    pub fn mkdir_all(&mut self, path: &str) -> io::Result<()> {
        let key = normalize(path);
        let mut current = String::new();
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            match self.nodes.get(&current) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(io::Error::other(format!("{current}: not a directory")));
                }
                None => {
                    self.nodes.insert(current.clone(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    /// Write a file, creating missing parent directories.
    pub fn write_file(&mut self, path: &str, contents: impl AsRef<[u8]>) -> io::Result<()> {
        let key = normalize(path);
        if key.is_empty() {
            return Err(io::Error::other(format!("{path}: is a directory")));
        }
        if let Some((parent, _)) = key.rsplit_once('/') {
            self.mkdir_all(parent)?;
        }
        if let Some(Node::Dir) = self.nodes.get(&key) {
            return Err(io::Error::other(format!("{key}: is a directory")));
        }
        self.nodes.insert(key, Node::File(contents.as_ref().to_vec()));
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        let key = normalize(path);
        match self.nodes.get(&key) {
            Some(Node::File(data)) => Ok(data.clone()),
            Some(Node::Dir) => Err(io::Error::other(format!("{key}: is a directory"))),
            None => Err(not_found(path)),
        }
    }

    /// Remove a file, or a directory together with everything below it.
    pub fn remove(&mut self, path: &str) -> io::Result<()> {
        let key = normalize(path);
        if key.is_empty() {
            return Err(io::Error::new(
                ErrorKind::PermissionDenied,
                "cannot remove the top directory",
            ));
        }
        if self.nodes.remove(&key).is_none() {
            return Err(not_found(path));
        }
        let prefix = format!("{key}/");
        self.nodes.retain(|k, _| !k.starts_with(&prefix));
        Ok(())
    }

    pub fn exists(&self, path: &str) -> bool {
        self.nodes.contains_key(&normalize(path))
    }
}

impl Backend for MemFs {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        match self.nodes.get(&normalize(path)) {
            Some(Node::Dir) => Ok(EntryKind::Dir),
            Some(Node::File(_)) => Ok(EntryKind::File),
            None => Err(not_found(path)),
        }
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let key = normalize(path);
        match self.nodes.get(&key) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::other(format!("{path}: not a directory")));
            }
            None => return Err(not_found(path)),
        }

        let prefix = if key.is_empty() {
            key
        } else {
            format!("{key}/")
        };
        let entries = self
            .nodes
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter_map(|(k, node)| {
                let rest = &k[prefix.len()..];
                if rest.is_empty() || rest.contains('/') {
                    return None;
                }
                let kind = match node {
                    Node::Dir => EntryKind::Dir,
                    Node::File(_) => EntryKind::File,
                };
                Some(DirEntry::new(rest, kind))
            })
            .collect();
        Ok(entries)
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(ErrorKind::NotFound, format!("{path}: file does not exist"))
}

/// Resolve `.` and `..` and drop leading, trailing and doubled slashes.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }
    parts.join("/")
}
