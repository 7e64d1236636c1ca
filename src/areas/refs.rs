//! References (HEAD, current branch, branch pointers)
//!
//! ## File Layout
//!
//! - `.vcs/HEAD`: hash of the checked-out commit, or empty
//! - `.vcs/CURRENT_BRANCH`: name of the branch HEAD tracks
//! - `.vcs/branches/<name>`: hash the branch points to, or empty when the
//!   branch has no commits yet
//!
//! HEAD is a direct pointer, not a symbolic one: checking out a commit moves
//! HEAD without touching `CURRENT_BRANCH`, and the next commit advances
//! whichever branch is current.

use crate::areas::workspace::FileSystem;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, VcsError};
use std::path::Path;
use std::sync::Arc;

pub const HEAD_REF_NAME: &str = "HEAD";
pub const CURRENT_BRANCH_FILE: &str = "CURRENT_BRANCH";
pub const BRANCHES_DIR: &str = "branches";

pub struct Refs {
    /// Path to the repository directory (typically `.vcs`)
    path: Box<Path>,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for Refs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refs").field("path", &self.path).finish()
    }
}

impl Refs {
    pub fn new(path: Box<Path>, fs: Arc<dyn FileSystem>) -> Self {
        Refs { path, fs }
    }

    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        self.read_pointer(&self.head_path())
    }

    pub fn update_head(&self, oid: Option<&ObjectId>) -> Result<()> {
        self.write_pointer(&self.head_path(), oid)
    }

    /// Name of the branch HEAD tracks, `master` when nothing is recorded
    pub fn read_current_branch(&self) -> Result<BranchName> {
        let content = self.fs.read_to_string(&self.current_branch_path())?;
        let content = content.trim();

        if content.is_empty() {
            Ok(BranchName::default())
        } else {
            BranchName::try_parse(content)
        }
    }

    pub fn set_current_branch(&self, name: &BranchName) -> Result<()> {
        self.fs
            .write(&self.current_branch_path(), name.as_ref().as_bytes())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        let path = self.branch_path(name);
        self.fs.exists(&path) && !self.fs.is_dir(&path)
    }

    /// Read a branch target; `NotFound` when the branch is unknown
    pub fn read_branch(&self, name: &BranchName) -> Result<Option<ObjectId>> {
        if !self.branch_exists(name) {
            return Err(VcsError::not_found("branch", name.as_ref()));
        }

        self.read_pointer(&self.branch_path(name))
    }

    pub fn update_branch(&self, name: &BranchName, oid: Option<&ObjectId>) -> Result<()> {
        self.write_pointer(&self.branch_path(name), oid)
    }

    /// Register a new branch pointing at `oid`
    pub fn create_branch(&self, name: &BranchName, oid: Option<&ObjectId>) -> Result<()> {
        // a plain file or a directory of nested branches both block the name
        if self.fs.exists(&self.branch_path(name)) {
            return Err(VcsError::AlreadyExists {
                kind: "branch",
                name: name.to_string(),
            });
        }

        self.update_branch(name, oid)
    }

    /// Every branch file, sorted by name
    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let mut branches = self
            .fs
            .list_directory(&self.branches_path())?
            .into_iter()
            .filter_map(|relative| {
                let name = relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy().to_string())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn read_pointer(&self, path: &Path) -> Result<Option<ObjectId>> {
        let content = self.fs.read_to_string(path)?;
        ObjectId::parse_pointer(&content)
    }

    fn write_pointer(&self, path: &Path, oid: Option<&ObjectId>) -> Result<()> {
        let content = oid.map(|oid| oid.as_ref()).unwrap_or_default();
        self.fs.write(path, content.as_bytes())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn current_branch_path(&self) -> Box<Path> {
        self.path.join(CURRENT_BRANCH_FILE).into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_DIR).into_boxed_path()
    }

    pub fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.branches_path().join(name.to_path()).into_boxed_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::workspace::MemoryFileSystem;
    use crate::artifacts::objects::hasher;
    use pretty_assertions::assert_eq;

    fn refs() -> Refs {
        Refs::new(
            Path::new("/repo/.vcs").into(),
            Arc::new(MemoryFileSystem::new()),
        )
    }

    fn branch(name: &str) -> BranchName {
        BranchName::try_parse(name).expect("valid branch name")
    }

    #[test]
    fn empty_head_reads_as_none() -> anyhow::Result<()> {
        let refs = refs();
        assert_eq!(refs.read_head()?, None);

        let oid = hasher::hash("commit");
        refs.update_head(Some(&oid))?;
        assert_eq!(refs.read_head()?, Some(oid));

        refs.update_head(None)?;
        assert_eq!(refs.read_head()?, None);
        Ok(())
    }

    #[test]
    fn duplicate_branch_is_rejected() -> anyhow::Result<()> {
        let refs = refs();
        refs.create_branch(&branch("feature"), None)?;

        let result = refs.create_branch(&branch("feature"), None);

        assert!(matches!(result, Err(VcsError::AlreadyExists { .. })));
        Ok(())
    }

    #[test]
    fn unknown_branch_is_not_found() {
        let result = refs().read_branch(&branch("ghost"));

        assert!(matches!(result, Err(VcsError::NotFound { .. })));
    }

    #[test]
    fn lists_nested_branches_sorted() -> anyhow::Result<()> {
        let refs = refs();
        for name in ["master", "feature/login", "bugfix"] {
            refs.create_branch(&branch(name), None)?;
        }

        assert_eq!(
            refs.list_branches()?,
            vec![branch("bugfix"), branch("feature/login"), branch("master")]
        );
        Ok(())
    }

    #[test]
    fn current_branch_defaults_to_master() -> anyhow::Result<()> {
        let refs = refs();
        assert_eq!(refs.read_current_branch()?, BranchName::default());

        refs.set_current_branch(&branch("feature"))?;
        assert_eq!(refs.read_current_branch()?, branch("feature"));
        Ok(())
    }
}
