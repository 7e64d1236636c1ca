use crate::areas::repository::Repository;
use crate::artifacts::checkout::restoration::{CheckoutReport, Restoration};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::hasher;
use crate::errors::Result;
use std::io::Write;

const RESTORATION_NOTICE: &str = "\
File contents are not retained by commits, so the working tree was left as is.
Files listed above need to be restored by hand to match the snapshot.";

impl Repository {
    /// Move HEAD to a stored commit
    ///
    /// `target` may be a full hash or an unambiguous prefix. The whole parent
    /// chain is loaded first, so a broken history fails before HEAD moves.
    /// The current branch is not changed; the next commit advances it.
    pub fn checkout(&mut self, target: &str) -> Result<CheckoutReport> {
        self.ensure_initialized()?;

        let oid = self.database().resolve(target)?;
        let chain = self.database().load_chain(&oid)?;
        let commit = chain.tip().clone();

        self.set_head(Some(oid))?;
        tracing::debug!(commit = %commit.hash(), depth = chain.len(), "checked out commit");

        let report = CheckoutReport::new(commit.clone(), self.inspect_snapshot(&commit)?);

        writeln!(
            self.writer(),
            "HEAD is now at {} {}",
            commit.hash().to_short_oid(),
            commit.message()
        )?;
        self.print_restorations(&report)?;

        Ok(report)
    }

    /// Compare every file of `commit` with the working tree
    pub(crate) fn inspect_snapshot(&self, commit: &Commit) -> Result<Vec<(String, Restoration)>> {
        commit
            .entries()
            .iter()
            .map(|entry| -> Result<(String, Restoration)> {
                let path = self.workspace_path(&entry.path);
                if !self.fs().exists(&path) {
                    return Ok((entry.path.clone(), Restoration::Missing));
                }

                let current = hasher::hash(self.fs().read(&path)?);
                let restoration = match &entry.hash {
                    Some(recorded) if *recorded == current => Restoration::Unchanged,
                    _ => Restoration::Diverged,
                };

                Ok((entry.path.clone(), restoration))
            })
            .collect()
    }

    fn print_restorations(&self, report: &CheckoutReport) -> Result<()> {
        let mut pending = report.pending().peekable();
        if pending.peek().is_none() {
            return Ok(());
        }

        for (path, restoration) in pending {
            writeln!(self.writer(), "{}{}", restoration, path)?;
        }
        writeln!(self.writer(), "{}", RESTORATION_NOTICE)?;

        Ok(())
    }
}
