//! Repository state machine
//!
//! A [`Repository`] is opened once per process. It loads the persisted state
//! (HEAD, current branch, staging set) into a single [`RepositoryState`] and
//! every mutating command writes its changes back before returning.
//!
//! The repository is always in one of three states:
//! uninitialized (no `.vcs`), initialized-empty (HEAD empty) or
//! initialized-with-history (HEAD names a stored commit).

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::{Clock, DiskFileSystem, FileSystem};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, VcsError};
use std::cell::{RefCell, RefMut};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Name of the repository directory inside the working tree
pub const REPOSITORY_DIR: &str = ".vcs";
pub const OBJECTS_DIR: &str = "objects";
pub const STAGING_FILE: &str = "staging";

/// The full mutable state of a repository
#[derive(Debug)]
pub struct RepositoryState {
    pub head: Option<ObjectId>,
    pub current_branch: BranchName,
    pub staging: StagingArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryStatus {
    Uninitialized,
    Empty,
    WithHistory,
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    fs: Arc<dyn FileSystem>,
    clock: Box<dyn Clock>,
    database: Database,
    refs: Refs,
    state: RepositoryState,
}

impl Repository {
    /// Open the repository rooted at `path` on the local disk
    pub fn with_clock(
        path: &str,
        writer: Box<dyn std::io::Write>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let path = Path::new(path);
        let path = path
            .canonicalize()
            .map_err(|e| VcsError::io(path, e))?;

        Self::with_collaborators(path, writer, Arc::new(DiskFileSystem), clock)
    }

    /// Open a repository over arbitrary file-system and clock collaborators
    pub fn with_collaborators(
        path: PathBuf,
        writer: Box<dyn std::io::Write>,
        fs: Arc<dyn FileSystem>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let repository_path = path.join(REPOSITORY_DIR);

        let database = Database::new(
            repository_path.join(OBJECTS_DIR).into_boxed_path(),
            fs.clone(),
        );
        let refs = Refs::new(repository_path.clone().into_boxed_path(), fs.clone());
        let staging = StagingArea::new(
            repository_path.join(STAGING_FILE).into_boxed_path(),
            fs.clone(),
        );

        let mut repository = Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            fs,
            clock,
            database,
            refs,
            state: RepositoryState {
                head: None,
                current_branch: BranchName::default(),
                staging,
            },
        };

        if repository.is_initialized() {
            repository.reload()?;
        }

        Ok(repository)
    }

    /// Re-read HEAD, current branch and the staging set from disk
    pub fn reload(&mut self) -> Result<()> {
        self.state.head = self.refs.read_head()?;
        self.state.current_branch = self.refs.read_current_branch()?;
        self.state.staging.rehydrate()?;

        tracing::debug!(
            head = ?self.state.head.as_ref().map(ObjectId::to_short_oid),
            branch = %self.state.current_branch,
            staged = self.state.staging.len(),
            "loaded repository state"
        );

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.fs.is_dir(&self.repository_path())
    }

    pub fn repository_status(&self) -> RepositoryStatus {
        match (self.is_initialized(), &self.state.head) {
            (false, _) => RepositoryStatus::Uninitialized,
            (true, None) => RepositoryStatus::Empty,
            (true, Some(_)) => RepositoryStatus::WithHistory,
        }
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(VcsError::NotARepository(self.path.to_path_buf()))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    pub fn head(&self) -> Option<&ObjectId> {
        self.state.head.as_ref()
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.state.current_branch
    }

    pub fn staging(&self) -> &StagingArea {
        &self.state.staging
    }

    /// Move HEAD and persist it
    pub(crate) fn set_head(&mut self, oid: Option<ObjectId>) -> Result<()> {
        self.refs.update_head(oid.as_ref())?;
        self.state.head = oid;
        Ok(())
    }

    /// Point the current branch at `oid` and persist it
    pub(crate) fn advance_current_branch(&self, oid: Option<&ObjectId>) -> Result<()> {
        self.refs.update_branch(&self.state.current_branch, oid)
    }

    /// Convert a user supplied path into the working-tree relative form stored
    /// in the staging area and commit records (always `/` separated)
    ///
    /// `.` and `..` are resolved lexically. Paths that leave the working tree
    /// are rejected with `InvalidPath`.
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let outside = || VcsError::InvalidPath {
            path: path.display().to_string(),
            reason: "outside of the working tree",
        };
        let stripped = path.strip_prefix(&self.path).unwrap_or(path);

        let mut components = Vec::new();
        for component in stripped.components() {
            match component {
                Component::Normal(name) => components.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => {
                    components.pop().ok_or_else(outside)?;
                }
                Component::RootDir | Component::Prefix(_) => return Err(outside()),
            }
        }

        Ok(components.join("/"))
    }

    /// Absolute location of a working-tree relative path
    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}
