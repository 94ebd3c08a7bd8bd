//! Recursive directory traversal
//!
//! Wraps [`ignore::Walk`] with every filter turned off, so hidden files and
//! gitignored paths are visited like anything else. Symbolic links are
//! followed and reported as the kind of their target.

use super::error::RewriteError;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Kind of a visited filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

/// A single entry reachable from a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl WalkEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Lazy iterator over everything below one root
pub struct Walk {
    root: PathBuf,
    inner: ignore::Walk,
}

impl Iterator for Walk {
    type Item = Result<WalkEntry, RewriteError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(RewriteError::Walk {
                        root: self.root.clone(),
                        source,
                    }))
                }
            };

            // The root itself is not part of the sequence
            if entry.depth() == 0 {
                continue;
            }

            let kind = entry
                .file_type()
                .map(EntryKind::from)
                .unwrap_or(EntryKind::Other);

            trace!(path = %entry.path().display(), ?kind, "Visited entry");
            return Some(Ok(WalkEntry::new(entry.into_path(), kind)));
        }
    }
}

/// Starts a walk below `root`.
///
/// Fails up front with [`RewriteError::RootAccess`] when the root does not
/// exist, is not a directory, or cannot be listed.
pub fn walk(root: &Path) -> Result<Walk, RewriteError> {
    fs::read_dir(root).map_err(|source| RewriteError::RootAccess {
        root: root.to_path_buf(),
        source,
    })?;

    let inner = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    Ok(Walk {
        root: root.to_path_buf(),
        inner,
    })
}
