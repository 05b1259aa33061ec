// Where saved canvases go. The session only ever moves whole byte blobs.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(path, bytes)
    }
}

/// Files kept in memory, for headless use and tests.
#[derive(Debug, Default, Clone)]
pub struct MemStorage {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }
}

impl Storage for MemStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_storage_writes_and_reads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("blob.bin");
        let mut fs = FsStorage;
        fs.write(&path, b"abc").expect("write");
        assert_eq!(fs.read(&path).expect("read"), b"abc");
    }

    #[test]
    fn mem_storage_missing_file_is_not_found() {
        let mem = MemStorage::new();
        let err = mem.read(Path::new("nope.png")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
