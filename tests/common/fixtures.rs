use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file on disk inside its own temporary directory
pub struct TestFixture {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestFixture {
    pub fn new(name: &str, content: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(Self { path, _dir: dir })
    }

    /// A path in a fresh directory where nothing exists yet
    pub fn missing(name: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        Ok(Self { path, _dir: dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        self._dir.path()
    }

    pub fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}
