//! Document reading and writing.
//!
//! Small documents are read straight into memory; large ones go through
//! a read-only memory map. Either way the content must be valid UTF-8.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{Error, IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum document size to read into memory (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Reader for a single source document.
///
/// Picks the reading strategy from the file size:
/// - Small files (< 1MB): read directly into memory
/// - Large files (>= 1MB): memory mapped
///
/// # Examples
///
/// ```no_run
/// use hwdist::io::DocumentReader;
///
/// let reader = DocumentReader::open("homework.md").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct DocumentReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl DocumentReader {
    /// Opens a document for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the path is not an existing
    /// regular file, or [`IoError::ReadFailed`] if it cannot be opened or
    /// is too large.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.is_file() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the document as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        if self.size >= MMAP_THRESHOLD {
            self.read_mapped()
        } else {
            self.read_direct()
        }
    }

    /// Validates UTF-8 against the map itself, so an invalid document is
    /// rejected before anything is copied out of it.
    fn read_mapped(&self) -> Result<String> {
        debug!(path = %self.path, size = self.size, "reading via memory map");
        // Safety: the map is read-only and dropped before returning
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        std::str::from_utf8(&mmap)
            .map(str::to_owned)
            .map_err(|e| self.invalid_utf8(&e))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct(&self) -> Result<String> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        String::from_utf8(buffer).map_err(|e| self.invalid_utf8(&e.utf8_error()))
    }

    fn invalid_utf8(&self, err: &std::str::Utf8Error) -> Error {
        IoError::ReadFailed {
            path: self.path.clone(),
            reason: format!("invalid UTF-8: {err}"),
        }
        .into()
    }
}

/// Reads a document to string.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    DocumentReader::open(path)?.read_to_string()
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.md");
        std::fs::write(&file_path, "1. Question\n").unwrap();

        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "1. Question\n");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_file("/nonexistent/path/hw.md");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_open_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = DocumentReader::open(temp_dir.path());
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_reader_size_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("hw.md");
        std::fs::write(&file_path, "Hello").unwrap();

        let reader = DocumentReader::open(&file_path).unwrap();
        assert_eq!(reader.size(), 5);
        assert!(reader.path().contains("hw.md"));
    }

    #[test]
    fn test_read_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.md");
        std::fs::write(&file_path, "**提示**：先化简\n").unwrap();

        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "**提示**：先化简\n");
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.md");
        std::fs::write(&file_path, "").unwrap();

        assert!(read_file(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_read_large_file_mmap_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.md");

        let large_content = "1. Q\n".repeat(300_000);
        std::fs::write(&file_path, &large_content).unwrap();

        let reader = DocumentReader::open(&file_path).unwrap();
        assert!(reader.size() >= MMAP_THRESHOLD);
        assert_eq!(reader.read_to_string().unwrap(), large_content);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("invalid.md");
        std::fs::write(&file_path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let result = read_file(&file_path);
        assert!(matches!(result, Err(Error::Io(IoError::ReadFailed { .. }))));
    }

    #[test]
    fn test_read_invalid_utf8_via_mmap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_invalid.md");

        let mut content = vec![0x78u8; 1024 * 1024 + 100];
        content[512 * 1024] = 0xff;
        std::fs::write(&file_path, &content).unwrap();

        match read_file(&file_path) {
            Err(Error::Io(IoError::ReadFailed { reason, .. })) => {
                assert!(reason.contains("invalid UTF-8"));
                assert!(reason.contains("524288"));
            }
            other => panic!("expected ReadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");

        write_file(&file_path, "### 1. Q\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "### 1. Q\n");
    }

    #[test]
    fn test_write_file_to_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a/b/c/deep.md");

        write_file(&file_path, "Deep content").unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "Deep content");
    }

    #[test]
    fn test_write_file_over_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = write_file(temp_dir.path(), "x");
        assert!(matches!(result, Err(Error::Io(IoError::WriteFailed { .. }))));
    }
}
