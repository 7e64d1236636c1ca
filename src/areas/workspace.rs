//! Collaborator interfaces for file-system access and time
//!
//! The core never touches `std::fs` directly. It goes through [`FileSystem`]
//! and [`Clock`], which keeps the state machine testable against the
//! in-memory [`MemoryFileSystem`] and a [`FixedClock`].
//!
//! A missing file reads as empty content rather than as an error; the
//! persisted layout relies on that (an empty `HEAD` means "no commits").

use crate::errors::{Result, VcsError};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use walkdir::WalkDir;

/// Timestamp format used for commit records, e.g. `Mon Jan  1 12:00:00 2024`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub trait FileSystem {
    /// Read the whole file, returning empty content when it does not exist.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file content, creating parent directories as needed.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// List every file below `path`, recursively, relative to `path` and sorted.
    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn create_dir(&self, path: &Path) -> Result<()>;

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = self.read(path)?;
        String::from_utf8(content).map_err(|e| {
            VcsError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }
}

pub trait Clock {
    fn now(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        FixedClock(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    fn temp_path(path: &Path) -> PathBuf {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        path.with_file_name(format!(".{}.tmp-{}", file_name, std::process::id()))
    }
}

impl FileSystem for DiskFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match std::fs::read(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(VcsError::io(path, e)),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| VcsError::io(parent, e))?;
        }

        // write next to the target and rename it over so readers never see a partial file
        let temp_path = Self::temp_path(path);
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| VcsError::io(&temp_path, e))?;
        file.write_all(content)
            .map_err(|e| VcsError::io(&temp_path, e))?;
        drop(file);

        std::fs::rename(&temp_path, path).map_err(|e| VcsError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(path)
                    .ok()
                    .map(|relative| relative.to_path_buf())
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| VcsError::io(path, e))
    }
}

/// In-memory file system keyed by full path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, path: &Path) {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.create_dir(parent)?;
        }

        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(path)
            || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let mut dirs = self.dirs.lock().unwrap_or_else(|e| e.into_inner());
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }

        Ok(())
    }
}
