use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// Change of a staged entry relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StagedChangeType {
    /// Path is not part of HEAD's snapshot
    Added,
    /// Path is in HEAD with a different (or unknown) content hash
    Modified,
    /// Staged content is identical to HEAD's
    Unchanged,
}

/// Change of a working-tree file that is not staged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
    Untracked,
}

impl From<&StagedChangeType> for &str {
    fn from(change: &StagedChangeType) -> Self {
        match change {
            StagedChangeType::Added => "new file:   ",
            StagedChangeType::Modified => "modified:   ",
            StagedChangeType::Unchanged => "unchanged:  ",
        }
    }
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::Modified => "modified:   ",
            WorkspaceChangeType::Deleted => "deleted:    ",
            WorkspaceChangeType::Untracked => "",
        }
    }
}

impl std::fmt::Display for StagedChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{:>width$}{}", "", label.green(), width = LABEL_WIDTH)
    }
}

impl std::fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{:>width$}{}", "", label.red(), width = LABEL_WIDTH)
    }
}
