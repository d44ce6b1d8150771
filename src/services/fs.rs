//! File persistence boundary

use std::io;
use std::path::Path;

/// What the editor needs from a filesystem
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as lines with `\n` and any trailing `\r` removed
    fn read_lines(&self, path: &Path) -> io::Result<Vec<Vec<u8>>>;

    /// Replace the file's contents with `bytes`, creating it if needed
    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// The local disk via `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<Vec<u8>>> {
        let content = std::fs::read(path)?;
        Ok(split_lines(&content))
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(path, bytes)
    }
}

/// Split on `\n`; a final terminator does not start another line
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|&b| b == b'\n')
        .map(|line| {
            let mut end = line.len();
            while end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }
            line[..end].to_vec()
        })
        .collect()
}
