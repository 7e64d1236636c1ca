use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

/// Lazy history walk, most recent commit first
///
/// Each step loads exactly one record from the object store. A read failure
/// is yielded once and ends the walk.
#[derive(Clone)]
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.load(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::workspace::MemoryFileSystem;
    use crate::errors::VcsError;
    use std::path::Path;
    use std::sync::Arc;

    #[test]
    fn walk_stops_after_a_missing_record() {
        let database = Database::new(
            Path::new("/repo/.vcs/objects").into(),
            Arc::new(MemoryFileSystem::new()),
        );
        let missing = crate::artifacts::objects::hasher::hash("missing");

        let mut walk = RevList::new(&database, Some(missing));

        assert!(matches!(walk.next(), Some(Err(VcsError::NotFound { .. }))));
        assert!(walk.next().is_none());
    }

    #[test]
    fn empty_start_yields_nothing() {
        let database = Database::new(
            Path::new("/repo/.vcs/objects").into(),
            Arc::new(MemoryFileSystem::new()),
        );

        assert_eq!(RevList::new(&database, None).count(), 0);
    }
}
