//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They name both
//! file contents (in the staging area) and commits (in the object store).
//!
//! ## Storage
//!
//! Commit records are stored flat as `.vcs/objects/<40-hex-chars>`.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OID_LENGTH};
use crate::errors::{Result, VcsError};
use std::path::PathBuf;

/// Validated content or commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Surrounding whitespace is ignored and upper-case digits are folded to
    /// lower case, so ids copied from anywhere compare equal.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref().trim();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VcsError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Parse the content of a pointer file (`HEAD`, `branches/<name>`)
    ///
    /// An empty file means "no commit yet".
    pub fn parse_pointer(content: &str) -> Result<Option<Self>> {
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Self::try_parse(content).map(Some)
        }
    }

    /// Relative path of the commit record inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
