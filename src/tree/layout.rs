use std::path::Path;

/// Indentation marker repeated once per depth level.
pub const INDENT: &str = "\u{2502}   "; // │
/// Branch marker drawn before every entry.
pub const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
pub const DIR_GLYPH: &str = "\u{1f4c1}"; // 📁
pub const FILE_GLYPH: &str = "\u{1f4c4}"; // 📄

/// Format one tree line, trailing newline included.
pub fn format_line(depth: usize, is_dir: bool, name: &str) -> String {
    let glyph = if is_dir { DIR_GLYPH } else { FILE_GLYPH };
    let mut line = String::with_capacity(INDENT.len() * depth + name.len() + 16);
    for _ in 0..depth {
        line.push_str(INDENT);
    }
    line.push_str(BRANCH);
    line.push_str(glyph);
    line.push(' ');
    line.push_str(name);
    line.push('\n');
    line
}

/// Depth of an OS-native `entry` below `root` (direct children are 0).
///
/// Counts separators in the root-relative path, so absolute roots and
/// platform separators give the same answer as a bare `dir` root.
pub fn native_depth(root: &Path, entry: &Path) -> usize {
    match entry.strip_prefix(root) {
        Ok(rel) => rel.components().count().saturating_sub(1),
        // Root and entry spelled differently (e.g. `.` vs `./`)
        Err(_) => entry
            .components()
            .count()
            .saturating_sub(root.components().count() + 1),
    }
}

/// Depth calculator for slash-delimited virtual paths.
///
/// The base depth is fixed by the root; every visited path is measured
/// against it and clamped at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashDepth {
    base: usize,
}

impl SlashDepth {
    pub fn new(root: &str) -> Self {
        let mut base = count_slashes(root);
        // `.` is the abstract top; a trailing `/` already separates children
        if !is_top(root) && !root.ends_with('/') {
            base += 1;
        }
        Self { base }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn of(&self, path: &str) -> usize {
        count_slashes(path).saturating_sub(self.base)
    }
}

/// Join a child name onto a slash-delimited directory path.
pub fn join(dir: &str, name: &str) -> String {
    if is_top(dir) {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Final segment of a slash-delimited path.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None if trimmed.is_empty() && path.starts_with('/') => "/",
        None if trimmed.is_empty() => ".",
        None => trimmed,
    }
}

fn is_top(path: &str) -> bool {
    path.is_empty() || path == "."
}

fn count_slashes(path: &str) -> usize {
    path.bytes().filter(|b| *b == b'/').count()
}
