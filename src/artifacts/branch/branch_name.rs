use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{Result, VcsError};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name pattern is a valid regex")
});

/// A validated branch name
///
/// Follows git's ref-name rules. Slashes are allowed and map to nested
/// files under `.vcs/branches/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(VcsError::InvalidBranchName(name));
        }

        if INVALID_BRANCH_NAME.is_match(&name) {
            Err(VcsError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    /// Relative path of the branch file inside `.vcs/branches`
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl Default for BranchName {
    fn default() -> Self {
        BranchName(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
