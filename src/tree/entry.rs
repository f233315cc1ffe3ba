//! Directory entries as seen by the renderer

use std::fs::{self, DirEntry};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub path: PathBuf,
    /// Path relative to the traversal root, `/`-separated, with a trailing
    /// `/` for directories.
    pub relative: String,
    pub is_dir: bool,
}

impl TreeEntry {
    /// Build an entry from a directory listing item.
    ///
    /// Returns `None` if the entry does not live under `root`.
    pub fn from_dir_entry(entry: &DirEntry, root: &Path, follow_symlinks: bool) -> Option<Self> {
        let path = entry.path();
        let is_dir = if follow_symlinks {
            fs::metadata(&path).is_ok_and(|m| m.is_dir())
        } else {
            entry.file_type().is_ok_and(|t| t.is_dir())
        };
        let relative = relative_posix(root, &path, is_dir)?;

        Some(Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            relative,
            is_dir,
        })
    }
}

/// Express `path` relative to `root` with `/` separators, appending a
/// trailing `/` when `is_dir` is set.
pub fn relative_posix(root: &Path, path: &Path, is_dir: bool) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut posix = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    if posix.is_empty() {
        return None;
    }
    if is_dir {
        posix.push('/');
    }
    Some(posix)
}

/// Name printed on the first line: the root's basename, or the full path
/// when there is none (the filesystem root).
pub fn display_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Make `path` absolute, resolve symlinks, and check it can be listed.
///
/// A root that is missing, is not a directory, or cannot be read is fatal.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root_error = |source| Error::Root {
        path: path.to_path_buf(),
        source,
    };
    let root = path.canonicalize().map_err(root_error)?;
    fs::read_dir(&root).map_err(root_error)?;
    Ok(root)
}
