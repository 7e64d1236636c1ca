//! Commit record
//!
//! A commit is an immutable snapshot: a message, the time it was taken, the
//! list of files it covers and at most one parent. The parent is stored as a
//! hash and resolved through the object store, never as an owned pointer.
//!
//! ## Format
//!
//! On disk (`.vcs/objects/<hash>`), one field per line:
//! ```text
//! <hash>
//! <message>
//! <timestamp>
//! <path>:<content-hash>      (one line per file)
//! <parent-hash or empty line>
//! ```
//!
//! The parent line is always the last line of the record, so a root commit
//! ends with an empty line. File lines without a `:<hash>` suffix are accepted
//! and yield entries with no recorded content hash.

use crate::artifacts::objects::hasher;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, VcsError};
use derive_new::new;

/// One file of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileEntry {
    pub path: String,
    /// Content hash at the time the file was staged, when known
    pub hash: Option<ObjectId>,
}

impl FileEntry {
    fn serialize(&self) -> String {
        match &self.hash {
            Some(hash) => format!("{}:{}", self.path, hash),
            None => self.path.clone(),
        }
    }

    fn deserialize(line: &str) -> Self {
        match line.rsplit_once(':') {
            Some((path, hash)) => match ObjectId::try_parse(hash) {
                Ok(hash) => FileEntry::new(path.to_string(), Some(hash)),
                Err(_) => FileEntry::new(line.to_string(), None),
            },
            None => FileEntry::new(line.to_string(), None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    hash: ObjectId,
    message: String,
    timestamp: String,
    files: Vec<FileEntry>,
    parent: Option<ObjectId>,
}

impl Commit {
    /// Build a commit and derive its hash from message, timestamp, files and parent
    ///
    /// Every file line (path and content hash) and the parent id take part in
    /// the hash, so a commit on top of another one never shares its identity
    /// even when message and timestamp are equal.
    pub fn new(
        message: String,
        timestamp: String,
        files: Vec<FileEntry>,
        parent: Option<ObjectId>,
    ) -> Self {
        let hash = Self::compute_hash(&message, &timestamp, &files, parent.as_ref());

        Commit {
            hash,
            message,
            timestamp,
            files,
            parent,
        }
    }

    fn compute_hash(
        message: &str,
        timestamp: &str,
        files: &[FileEntry],
        parent: Option<&ObjectId>,
    ) -> ObjectId {
        let mut data = format!("{}\n{}\n", message, timestamp);
        for file in files {
            data.push_str(&file.serialize());
            data.push('\n');
        }
        if let Some(parent) = parent {
            data.push_str(parent.as_ref());
        }
        data.push('\n');

        hasher::hash(data)
    }

    pub fn hash(&self) -> &ObjectId {
        &self.hash
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.files
    }

    /// Paths of the snapshot, in commit order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|entry| entry.path.as_str())
    }

    pub fn entry(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn serialize(&self) -> String {
        let mut record = format!("{}\n{}\n{}\n", self.hash, self.message, self.timestamp);
        for file in &self.files {
            record.push_str(&file.serialize());
            record.push('\n');
        }
        if let Some(parent) = &self.parent {
            record.push_str(parent.as_ref());
        }
        record.push('\n');

        record
    }

    /// Parse a record stored under `oid`
    ///
    /// The stored hash line must match the key the record was found under.
    pub fn deserialize(oid: &ObjectId, record: &str) -> Result<Self> {
        let corrupt = |reason: &str| VcsError::CorruptObject {
            oid: oid.to_string(),
            reason: reason.to_string(),
        };

        let body = record
            .strip_suffix('\n')
            .ok_or_else(|| corrupt("record is not newline terminated"))?;
        let lines = body.split('\n').collect::<Vec<_>>();

        let [hash, message, timestamp, rest @ ..] = lines.as_slice() else {
            return Err(corrupt("record is truncated"));
        };
        let Some((parent, files)) = rest.split_last() else {
            return Err(corrupt("missing parent line"));
        };

        let hash = ObjectId::try_parse(hash).map_err(|_| corrupt("invalid hash line"))?;
        if &hash != oid {
            return Err(corrupt("hash line does not match the object key"));
        }

        let parent = ObjectId::parse_pointer(parent).map_err(|_| corrupt("invalid parent line"))?;
        let files = files
            .iter()
            .map(|line| FileEntry::deserialize(line))
            .collect();

        Ok(Commit {
            hash,
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            files,
            parent,
        })
    }
}
