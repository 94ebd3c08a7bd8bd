//! FileSystem trait definition

use std::io;
use std::path::Path;

/// File contents access used by the rewrite driver
///
/// Only reads and writes of matched files go through here; directory
/// traversal always lists the real disk. Errors stay as [`io::Error`] so the
/// driver can attach the failing path and keep the kind (`NotFound`,
/// `PermissionDenied`, `InvalidData`, ...).
pub trait FileSystem {
    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents, truncating whatever was there
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
