use crate::areas::repository::{REPOSITORY_DIR, Repository};
use crate::artifacts::checkout::restoration::Restoration;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::file_change::{StagedChangeType, WorkspaceChangeType};
use crate::artifacts::status::status_report::StatusReport;
use crate::errors::Result;
use std::collections::BTreeMap;
use std::io::Write;

// Terminology:
// - staged files: entries of the staging area, compared with HEAD's snapshot
// - modified files: in HEAD, not staged, content hash differs from the recorded one
// - deleted files: in HEAD, not staged, gone from the working tree
// - untracked files: neither in HEAD nor staged
impl Repository {
    /// Compute the status report without printing it
    ///
    /// Tracked files are only reported as modified when their current content
    /// hash differs from the hash recorded in HEAD.
    pub fn status(&self) -> Result<StatusReport> {
        self.ensure_initialized()?;

        let head_commit = match self.head() {
            Some(oid) => Some(self.database().load(oid)?),
            None => None,
        };

        let staged = self
            .staging()
            .entries()
            .iter()
            .map(|staged| {
                let change = match head_commit.as_ref().and_then(|c| c.entry(&staged.path)) {
                    None => StagedChangeType::Added,
                    Some(entry) if entry.hash.as_ref() == Some(&staged.hash) => {
                        StagedChangeType::Unchanged
                    }
                    Some(_) => StagedChangeType::Modified,
                };
                (staged.clone(), change)
            })
            .collect::<Vec<_>>();

        let mut workspace = BTreeMap::new();
        if let Some(commit) = &head_commit {
            self.detect_workspace_changes(commit, &mut workspace)?;
        }
        self.detect_untracked_files(head_commit.as_ref(), &mut workspace)?;

        Ok(StatusReport { staged, workspace })
    }

    pub fn show_status(&self) -> Result<()> {
        let report = self.status()?;

        writeln!(self.writer(), "On branch {}", self.current_branch())?;
        if self.head().is_none() {
            writeln!(self.writer(), "\nNo commits yet")?;
        }

        if !report.staged.is_empty() {
            writeln!(self.writer(), "\nChanges to be committed:")?;
            for (staged, change) in &report.staged {
                writeln!(
                    self.writer(),
                    "{}{} ({})",
                    change,
                    staged.path,
                    staged.hash.to_short_oid()
                )?;
            }
        }

        let changed = report
            .workspace
            .iter()
            .filter(|(_, change)| **change != WorkspaceChangeType::Untracked)
            .collect::<Vec<_>>();
        if !changed.is_empty() {
            writeln!(self.writer(), "\nChanges not staged for commit:")?;
            for (path, change) in changed {
                writeln!(self.writer(), "{}{}", change, path)?;
            }
        }

        let untracked = report.untracked();
        if !untracked.is_empty() {
            writeln!(self.writer(), "\nUntracked files:")?;
            for path in untracked {
                writeln!(self.writer(), "{}{}", WorkspaceChangeType::Untracked, path)?;
            }
        }

        if report.is_clean() {
            writeln!(self.writer(), "\nnothing to commit, working tree clean")?;
        }

        Ok(())
    }

    fn detect_workspace_changes(
        &self,
        commit: &Commit,
        workspace: &mut BTreeMap<String, WorkspaceChangeType>,
    ) -> Result<()> {
        for (path, restoration) in self.inspect_snapshot(commit)? {
            if self.staging().is_staged(&path) {
                continue;
            }

            match restoration {
                Restoration::Unchanged => {}
                Restoration::Diverged => {
                    workspace.insert(path, WorkspaceChangeType::Modified);
                }
                Restoration::Missing => {
                    workspace.insert(path, WorkspaceChangeType::Deleted);
                }
            }
        }

        Ok(())
    }

    fn detect_untracked_files(
        &self,
        commit: Option<&Commit>,
        workspace: &mut BTreeMap<String, WorkspaceChangeType>,
    ) -> Result<()> {
        let files = self
            .fs()
            .list_directory(self.path())?
            .into_iter()
            .map(|file| self.relative_path(&file))
            .collect::<Result<Vec<_>>>()?;

        let untracked = files
            .into_iter()
            .filter(|file| !file.starts_with(&format!("{REPOSITORY_DIR}/")))
            .filter(|file| !self.staging().is_staged(file))
            .filter(|file| commit.is_none_or(|c| c.entry(file).is_none()));

        for file in untracked {
            workspace.insert(file, WorkspaceChangeType::Untracked);
        }

        Ok(())
    }
}
