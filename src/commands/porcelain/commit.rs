use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, FileEntry};
use crate::errors::{Result, VcsError};
use std::io::Write;

impl Repository {
    /// Record the staged files as a new commit on top of HEAD
    ///
    /// The commit record, HEAD and the current branch pointer are persisted
    /// before the staging area is cleared. With nothing staged the call fails
    /// and no state changes.
    pub fn commit(&mut self, message: &str) -> Result<Commit> {
        self.ensure_initialized()?;

        if self.staging().is_empty() {
            return Err(VcsError::EmptyStaging);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(VcsError::InvalidMessage("message is empty".to_string()));
        }
        if message.contains('\n') || message.contains('\r') {
            return Err(VcsError::InvalidMessage(
                "message must fit on a single line".to_string(),
            ));
        }

        let files = self
            .staging()
            .entries()
            .iter()
            .map(|staged| FileEntry::new(staged.path.clone(), Some(staged.hash.clone())))
            .collect::<Vec<_>>();
        let parent = self.head().cloned();
        let is_root = parent.is_none();

        let commit = Commit::new(message.to_string(), self.clock().now(), files, parent);

        self.database().store(&commit)?;
        self.set_head(Some(commit.hash().clone()))?;
        self.advance_current_branch(Some(commit.hash()))?;
        self.state_mut().staging.clear()?;

        tracing::debug!(
            commit = %commit.hash(),
            branch = %self.current_branch(),
            files = commit.entries().len(),
            "created commit"
        );

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            self.current_branch(),
            if is_root { "(root-commit) " } else { "" },
            commit.hash().to_short_oid(),
            commit.message()
        )?;

        Ok(commit)
    }
}
