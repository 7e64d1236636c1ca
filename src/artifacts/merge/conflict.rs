//! Conflict markers
//!
//! Commit records hold no file contents, so only one version of a file is
//! ever available: the working copy. Both sides of the markers therefore
//! carry the same content. Real two-sided markers would need the other
//! branch's content to be stored somewhere.

pub const OURS_MARKER: &str = "<<<<<<< HEAD";
pub const SEPARATOR_MARKER: &str = "=======";
pub const THEIRS_MARKER: &str = ">>>>>>>";

/// Wrap `content` in conflict markers attributed to `branch`
pub fn wrap_in_markers(content: &str, branch: &str) -> String {
    format!(
        "{OURS_MARKER}\n{content}\n{SEPARATOR_MARKER}\n{content}\n{THEIRS_MARKER} {branch}\n"
    )
}
