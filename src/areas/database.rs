//! Object store
//!
//! Commit records live under `.vcs/objects/<hash>`, one plain-text file per
//! commit. Records are never rewritten or deleted once stored.
//!
//! Loading a chain is eager: [`Database::load_chain`] reads the commit and
//! every ancestor into a [`CommitGraph`]. That costs one read per ancestor on
//! every call, which is fine for small histories. History walks that only
//! need to look at commits one at a time use the lazy `RevList` instead.

use crate::areas::workspace::FileSystem;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use crate::errors::{Result, VcsError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub struct Database {
    path: Box<Path>,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

impl Database {
    pub fn new(path: Box<Path>, fs: Arc<dyn FileSystem>) -> Self {
        Database { path, fs }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, oid: &ObjectId) -> bool {
        self.fs.exists(&self.path.join(oid.to_path()))
    }

    /// Persist a commit record under its own hash
    ///
    /// Records are immutable. Storing an identical record again is a no-op;
    /// a different record under an existing hash is refused.
    pub fn store(&self, commit: &Commit) -> Result<()> {
        let object_path = self.path.join(commit.hash().to_path());
        let record = commit.serialize();

        if self.fs.exists(&object_path) {
            if self.fs.read_to_string(&object_path)? != record {
                return Err(VcsError::AlreadyExists {
                    kind: "commit",
                    name: commit.hash().to_string(),
                });
            }
            return Ok(());
        }

        self.fs.write(&object_path, record.as_bytes())?;
        tracing::debug!(commit = %commit.hash(), "stored commit record");

        Ok(())
    }

    /// Load a single commit record without touching its ancestors
    pub fn load(&self, oid: &ObjectId) -> Result<Commit> {
        let object_path = self.path.join(oid.to_path());

        if !self.fs.exists(&object_path) {
            return Err(VcsError::not_found("commit", oid.as_ref()));
        }

        let record = self.fs.read_to_string(&object_path)?;
        Commit::deserialize(oid, &record)
    }

    /// Load a commit together with its whole ancestor chain
    ///
    /// Fails with `NotFound` if any ancestor record is missing.
    pub fn load_chain(&self, oid: &ObjectId) -> Result<CommitGraph> {
        let mut commits = HashMap::new();
        let mut next = Some(oid.clone());

        while let Some(current) = next {
            if commits.contains_key(&current) {
                return Err(VcsError::CorruptObject {
                    oid: current.to_string(),
                    reason: "parent chain loops back on itself".to_string(),
                });
            }

            let commit = self.load(&current)?;
            next = commit.parent().cloned();
            commits.insert(current, commit);
        }

        tracing::debug!(tip = %oid, depth = commits.len(), "loaded commit chain");

        Ok(CommitGraph {
            tip: oid.clone(),
            commits,
        })
    }

    /// Find every stored commit whose hash starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();

        Ok(self
            .fs
            .list_directory(&self.path)?
            .into_iter()
            .filter_map(|entry| ObjectId::try_parse(entry.to_string_lossy()).ok())
            .filter(|oid| oid.as_ref().starts_with(&prefix))
            .collect())
    }

    /// Resolve a full or abbreviated hash to a stored commit id
    pub fn resolve(&self, revision: &str) -> Result<ObjectId> {
        let revision = revision.trim();

        if revision.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(revision)?;
            return if self.exists(&oid) {
                Ok(oid)
            } else {
                Err(VcsError::not_found("commit", revision))
            };
        }

        if revision.len() < MIN_PREFIX_LENGTH
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(VcsError::not_found("commit", revision));
        }

        let mut candidates = self.find_by_prefix(revision)?;
        match candidates.len() {
            0 => Err(VcsError::not_found("commit", revision)),
            1 => Ok(candidates.remove(0)),
            _ => Err(VcsError::AmbiguousObjectId {
                prefix: revision.to_string(),
                candidates: candidates.iter().map(ObjectId::to_short_oid).collect(),
            }),
        }
    }
}

/// Commits of one chain, indexed by hash
///
/// Parents are looked up by key, so several graphs can describe overlapping
/// histories without sharing ownership of any commit.
#[derive(Debug, Clone)]
pub struct CommitGraph {
    tip: ObjectId,
    commits: HashMap<ObjectId, Commit>,
}

impl CommitGraph {
    pub fn tip(&self) -> &Commit {
        // the tip is always inserted by `load_chain`
        &self.commits[&self.tip]
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Walk from the tip to the root, most recent first
    pub fn ancestors(&self) -> impl Iterator<Item = &Commit> {
        let mut next = Some(&self.tip);

        std::iter::from_fn(move || {
            let commit = self.commits.get(next?)?;
            next = commit.parent();
            Some(commit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::workspace::MemoryFileSystem;
    use crate::artifacts::objects::commit::FileEntry;
    use crate::artifacts::objects::hasher;
    use pretty_assertions::assert_eq;

    fn database() -> Database {
        Database::new(
            Path::new("/repo/.vcs/objects").into(),
            Arc::new(MemoryFileSystem::new()),
        )
    }

    fn commit(message: &str, parent: Option<&Commit>) -> Commit {
        Commit::new(
            message.to_string(),
            format!("time of {message}"),
            vec![FileEntry::new(
                format!("{message}.txt"),
                Some(hasher::hash(message)),
            )],
            parent.map(|p| p.hash().clone()),
        )
    }

    #[test]
    fn save_then_load_chain_reconstructs_every_ancestor() -> anyhow::Result<()> {
        let database = database();
        let first = commit("first", None);
        let second = commit("second", Some(&first));
        let third = commit("third", Some(&second));
        for c in [&first, &second, &third] {
            database.store(c)?;
        }

        let graph = database.load_chain(third.hash())?;

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.tip(), &third);
        let chain = graph.ancestors().cloned().collect::<Vec<_>>();
        assert_eq!(chain, vec![third, second, first]);
        Ok(())
    }

    #[test]
    fn storing_twice_keeps_the_record_and_refuses_a_different_one() -> anyhow::Result<()> {
        let database = database();
        let first = commit("first", None);
        database.store(&first)?;
        database.store(&first)?;

        let object_path = database.objects_path().join(first.hash().to_path());
        database.fs.write(&object_path, b"tampered record\n")?;

        assert!(matches!(
            database.store(&first),
            Err(VcsError::AlreadyExists { kind: "commit", .. })
        ));
        Ok(())
    }

    #[test]
    fn missing_commit_is_not_found() {
        let result = database().load(&hasher::hash("nope"));

        assert!(matches!(result, Err(VcsError::NotFound { .. })));
    }

    #[test]
    fn missing_ancestor_fails_the_chain() -> anyhow::Result<()> {
        let database = database();
        let first = commit("first", None);
        let second = commit("second", Some(&first));
        database.store(&second)?;

        assert!(database.load(second.hash()).is_ok());
        assert!(matches!(
            database.load_chain(second.hash()),
            Err(VcsError::NotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn resolves_unique_prefixes() -> anyhow::Result<()> {
        let database = database();
        let first = commit("first", None);
        database.store(&first)?;

        let prefix = &first.hash().as_ref()[..8];

        assert_eq!(&database.resolve(prefix)?, first.hash());
        assert_eq!(&database.resolve(first.hash().as_ref())?, first.hash());
        assert!(matches!(
            database.resolve("abc"),
            Err(VcsError::NotFound { .. })
        ));
        Ok(())
    }
}
