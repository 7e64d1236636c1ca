//! Error types for repository operations
//!
//! Every core operation returns [`Result`] instead of aborting the process.
//! The binary decides how failures are rendered and which exit code is used.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the version-control core.
#[derive(Debug, Error)]
pub enum VcsError {
    /// A file, commit or branch could not be found.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// A branch with the same name is already registered.
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: &'static str, name: String },

    /// `commit` was called with nothing staged.
    #[error("nothing staged for commit")]
    EmptyStaging,

    /// The working directory has no repository layout.
    #[error("not a repository (or any .vcs directory): {}", .0.display())]
    NotARepository(PathBuf),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("invalid object id: '{0}'")]
    InvalidObjectId(String),

    /// An abbreviated hash matched more than one stored commit.
    #[error("short object id '{prefix}' is ambiguous: {}", candidates.join(", "))]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("corrupt commit record {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// A path that cannot be tracked: outside the working tree, or not
    /// representable in the line-based record formats.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("invalid commit message: {0}")]
    InvalidMessage(String),

    /// Underlying read or write failure on a persisted file.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure while writing user-facing output.
    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl VcsError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        VcsError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VcsError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VcsError>;
