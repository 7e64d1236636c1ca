use crate::artifacts::staging::staged_file::StagedFile;
use crate::artifacts::status::file_change::{StagedChangeType, WorkspaceChangeType};
use std::collections::BTreeMap;

/// Result of `status`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Staged entries in staging order, with their change relative to HEAD
    pub staged: Vec<(StagedFile, StagedChangeType)>,
    /// Unstaged working-tree changes, keyed by path
    pub workspace: BTreeMap<String, WorkspaceChangeType>,
}

impl StatusReport {
    fn paths_with(&self, change: WorkspaceChangeType) -> Vec<&str> {
        self.workspace
            .iter()
            .filter(|(_, c)| **c == change)
            .map(|(path, _)| path.as_str())
            .collect()
    }

    pub fn modified(&self) -> Vec<&str> {
        self.paths_with(WorkspaceChangeType::Modified)
    }

    pub fn deleted(&self) -> Vec<&str> {
        self.paths_with(WorkspaceChangeType::Deleted)
    }

    pub fn untracked(&self) -> Vec<&str> {
        self.paths_with(WorkspaceChangeType::Untracked)
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.workspace.is_empty()
    }
}
