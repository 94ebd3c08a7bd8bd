//! Errors raised while rewriting matched files
//!
//! Every variant is fatal: the driver never recovers locally, so the first
//! error ends the run and bubbles up to `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    /// A root directory is missing, is not a directory, or cannot be listed
    #[error("Cannot access root directory {}", .root.display())]
    RootAccess {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below a root could not be listed during traversal
    #[error("Failed to walk {}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// A matched file could not be opened or is not valid UTF-8
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched file could not be overwritten
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Path the failure refers to (a root for traversal errors, a file otherwise)
    pub fn path(&self) -> &std::path::Path {
        match self {
            RewriteError::RootAccess { root, .. } | RewriteError::Walk { root, .. } => root,
            RewriteError::Read { path, .. } | RewriteError::Write { path, .. } => path,
        }
    }
}
