use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Result;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    Reinitialized,
}

impl Repository {
    /// Create the repository layout
    ///
    /// Running `init` on an existing repository only fills in missing pieces
    /// of the layout. HEAD, the staging set, branch pointers and the current
    /// branch are never overwritten.
    pub fn init(&mut self) -> Result<InitOutcome> {
        let outcome = if self.is_initialized() {
            InitOutcome::Reinitialized
        } else {
            InitOutcome::Initialized
        };

        self.fs().create_dir(&self.repository_path())?;
        self.fs().create_dir(self.database().objects_path())?;
        self.fs().create_dir(&self.refs().branches_path())?;

        self.write_if_missing(&self.refs().head_path(), "")?;
        self.write_if_missing(self.staging().path(), "")?;

        let default_branch = BranchName::default();
        if self.refs().list_branches()?.is_empty() {
            self.refs().create_branch(&default_branch, None)?;
        }
        self.write_if_missing(
            &self.refs().current_branch_path(),
            default_branch.as_ref(),
        )?;

        self.reload()?;
        tracing::debug!(?outcome, path = %self.path().display(), "initialized repository");

        match outcome {
            InitOutcome::Initialized => writeln!(
                self.writer(),
                "Initialized empty repository in {}",
                self.repository_path().display()
            )?,
            InitOutcome::Reinitialized => writeln!(
                self.writer(),
                "Reinitialized existing repository in {}",
                self.repository_path().display()
            )?,
        }

        Ok(outcome)
    }

    fn write_if_missing(&self, path: &Path, content: &str) -> Result<()> {
        if !self.fs().exists(path) {
            self.fs().write(path, content.as_bytes())?;
        }

        Ok(())
    }
}
