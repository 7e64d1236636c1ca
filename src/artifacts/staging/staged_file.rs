use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, VcsError};
use derive_new::new;

/// A working-tree file as of its last `add`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagedFile {
    pub path: String,
    pub hash: ObjectId,
}

impl StagedFile {
    /// Render as a `path:hash` staging line
    pub fn serialize(&self) -> String {
        format!("{}:{}", self.path, self.hash)
    }

    /// Parse a `path:hash` line, splitting on the last colon
    pub fn deserialize(line: &str) -> Result<Self> {
        let (path, hash) = line
            .rsplit_once(':')
            .ok_or_else(|| VcsError::InvalidObjectId(line.to_string()))?;

        Ok(StagedFile::new(path.to_string(), ObjectId::try_parse(hash)?))
    }
}
