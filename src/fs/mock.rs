use super::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file store with per-path write protection
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
    read_only: RwLock<HashSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            read_only: RwLock::new(HashSet::new()),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        self.files
            .write()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), content.to_vec());
    }

    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.read_only
            .write()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self.files.read().unwrap();
        let bytes = files.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File not found: {:?}", path))
        })?;

        String::from_utf8(bytes.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.read_only.read().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Read-only file: {:?}", path),
            ));
        }

        let mut files = self.files.write().unwrap();
        match files.get_mut(path) {
            Some(existing) => {
                *existing = contents.as_bytes().to_vec();
                Ok(())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {:?}", path),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_mock() {
        let fs = MockFileSystem::new();
        fs.add_file("src/A.sol", "a\n");

        assert_eq!(fs.read_to_string(Path::new("src/A.sol")).unwrap(), "a\n");
        fs.write(Path::new("src/A.sol"), "a \n").unwrap();
        assert_eq!(fs.contents("src/A.sol").as_deref(), Some("a \n"));
    }

    #[test]
    fn test_read_only_write_fails() {
        let fs = MockFileSystem::new();
        fs.add_file("src/A.sol", "a\n");
        fs.set_read_only("src/A.sol");

        let err = fs.write(Path::new("src/A.sol"), "a \n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(fs.contents("src/A.sol").as_deref(), Some("a\n"));
    }

    #[test]
    fn test_invalid_utf8_read_fails() {
        let fs = MockFileSystem::new();
        fs.add_bytes("src/Bad.sol", &[0xff, 0x0a]);

        let err = fs.read_to_string(Path::new("src/Bad.sol")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
