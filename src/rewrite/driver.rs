//! Read-transform-write over every matched file
//!
//! Roots are processed in order, files one at a time. The first error stops
//! the run; files rewritten before it stay rewritten.

use super::error::RewriteError;
use super::filter::is_eligible;
use super::transform::{added_bytes, transform};
use super::walker::walk;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Root directories walked on every run, in order
pub const DEFAULT_ROOTS: [&str; 2] = ["test", "src"];

/// Totals for a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub roots_walked: usize,
    pub entries_visited: usize,
    pub files_rewritten: usize,
    pub bytes_added: usize,
}

/// Rewrites the matched files below [`DEFAULT_ROOTS`]
///
/// Roots are always walked on the real disk; `fs` only serves the contents
/// of the files selected by the walk.
pub struct Rewriter<F: FileSystem> {
    base_dir: PathBuf,
    fs: F,
}

impl<F: FileSystem> Rewriter<F> {
    /// Creates a rewriter whose roots are resolved against `base_dir`.
    ///
    /// An empty `base_dir` leaves the roots relative to the process working
    /// directory.
    pub fn new(base_dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            base_dir: base_dir.into(),
            fs,
        }
    }

    /// Rewriter over `test/` and `src/` of the current working directory
    pub fn in_current_dir(fs: F) -> Self {
        Self::new(PathBuf::new(), fs)
    }

    pub fn roots(&self) -> impl Iterator<Item = PathBuf> + '_ {
        DEFAULT_ROOTS.iter().map(|root| self.base_dir.join(root))
    }

    pub fn run(&self) -> Result<RewriteSummary, RewriteError> {
        let mut summary = RewriteSummary::default();

        for root in self.roots() {
            self.rewrite_root(&root, &mut summary)?;
        }

        info!(
            roots = summary.roots_walked,
            entries = summary.entries_visited,
            files = summary.files_rewritten,
            bytes_added = summary.bytes_added,
            "Rewrite complete"
        );
        Ok(summary)
    }

    /// Walks one root and rewrites every eligible file below it
    pub fn rewrite_root(
        &self,
        root: &Path,
        summary: &mut RewriteSummary,
    ) -> Result<(), RewriteError> {
        info!(root = %root.display(), "Scanning root");

        for entry in walk(root)? {
            let entry = entry?;
            summary.entries_visited += 1;

            if !is_eligible(&entry) {
                continue;
            }

            summary.bytes_added += self.rewrite_file(entry.path())?;
            summary.files_rewritten += 1;
        }

        summary.roots_walked += 1;
        Ok(())
    }

    /// Applies the transform pass to one file, returning the bytes it added
    pub fn rewrite_file(&self, path: &Path) -> Result<usize, RewriteError> {
        let source = self
            .fs
            .read_to_string(path)
            .map_err(|source| RewriteError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let spaced = transform(&source);
        self.fs
            .write(path, &spaced)
            .map_err(|source| RewriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        let added = added_bytes(&source);
        debug!(path = %path.display(), added, "Rewrote file");
        Ok(added)
    }
}
