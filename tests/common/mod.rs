#![allow(dead_code)]

pub mod command;
pub mod file;

/// Timestamp recorded on every commit made through [`command::vcs_commit`]
pub const COMMIT_DATE: &str = "Mon Jan  1 12:00:00 2024";

/// Read a file below `.vcs` as a string
pub fn read_repository_file(dir: &std::path::Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(".vcs").join(relative)).unwrap_or_default()
}

/// Current HEAD hash, empty when there are no commits
pub fn head(dir: &std::path::Path) -> String {
    read_repository_file(dir, "HEAD").trim().to_string()
}

/// Hash a branch points at, empty when it has no commits
pub fn branch_tip(dir: &std::path::Path, branch: &str) -> String {
    read_repository_file(dir, &format!("branches/{branch}"))
        .trim()
        .to_string()
}
