//! Staging area
//!
//! Tracks the files that will make up the next commit, one entry per path,
//! in the order they were first added. The whole set is rewritten to
//! `.vcs/staging` after every mutation as one `path:hash` line per entry.

use crate::areas::workspace::FileSystem;
use crate::artifacts::staging::staged_file::StagedFile;
use crate::errors::Result;
use std::path::Path;
use std::sync::Arc;

pub struct StagingArea {
    /// Path to the staging file (typically `.vcs/staging`)
    path: Box<Path>,
    fs: Arc<dyn FileSystem>,
    entries: Vec<StagedFile>,
}

impl std::fmt::Debug for StagingArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagingArea")
            .field("path", &self.path)
            .field("entries", &self.entries)
            .finish()
    }
}

impl StagingArea {
    pub fn new(path: Box<Path>, fs: Arc<dyn FileSystem>) -> Self {
        StagingArea {
            path,
            fs,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staging set from disk, replacing whatever is in memory
    ///
    /// Blank lines are skipped; a missing file is an empty set.
    pub fn rehydrate(&mut self) -> Result<()> {
        let content = self.fs.read_to_string(&self.path)?;

        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(StagedFile::deserialize)
            .collect::<Result<Vec<_>>>()?;

        Ok(())
    }

    /// Insert or update the entry for `staged.path`, then persist the set
    pub fn stage(&mut self, staged: StagedFile) -> Result<()> {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.path == staged.path)
        {
            Some(entry) => entry.hash = staged.hash,
            None => self.entries.push(staged),
        }

        self.write_updates()
    }

    /// Drop every entry and persist the empty set
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.write_updates()
    }

    pub fn is_staged(&self, path: &str) -> bool {
        self.entry(path).is_some()
    }

    pub fn entry(&self, path: &str) -> Option<&StagedFile> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn entries(&self) -> &[StagedFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn write_updates(&self) -> Result<()> {
        let content = self
            .entries
            .iter()
            .map(|entry| format!("{}\n", entry.serialize()))
            .collect::<String>();

        self.fs.write(&self.path, content.as_bytes())
    }
}
