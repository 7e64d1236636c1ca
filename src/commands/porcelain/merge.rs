use crate::areas::database::CommitGraph;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::merge::conflict;
use crate::artifacts::merge::merge_outcome::MergeOutcome;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Fast-forward the current branch to `name`'s tip
    ///
    /// HEAD and the current branch are set to the target unconditionally.
    /// Ancestry of the current branch tip (HEAD when the branch has no
    /// commits) is only inspected to report whether commits were left
    /// behind; it never blocks the merge.
    pub fn merge(&mut self, name: &str) -> Result<MergeOutcome> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name)?;
        let Some(target) = self.refs().read_branch(&name)? else {
            writeln!(self.writer(), "Nothing to merge from '{}'", name)?;
            return Ok(MergeOutcome::Empty);
        };

        let branch_tip = self.refs().read_branch(self.current_branch())?;
        if self.head() == Some(&target) && branch_tip.as_ref() == Some(&target) {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(MergeOutcome::UpToDate);
        }

        // ancestry is judged from the branch tip, which is what moves
        let base = branch_tip.or_else(|| self.head().cloned());
        let target_chain = self.database().load_chain(&target)?;
        let outcome = match base {
            None => MergeOutcome::FastForward {
                from: None,
                to: target.clone(),
            },
            Some(base) if target_chain.contains(&base) => MergeOutcome::FastForward {
                from: Some(base),
                to: target.clone(),
            },
            Some(base) => MergeOutcome::Overwrote {
                discarded: self.count_unmerged(&base, &target_chain)?,
                from: base,
                to: target.clone(),
            },
        };

        self.set_head(Some(target.clone()))?;
        self.advance_current_branch(Some(&target))?;

        match &outcome {
            MergeOutcome::Overwrote {
                from, discarded, ..
            } => {
                tracing::warn!(
                    from = %from.to_short_oid(),
                    to = %target.to_short_oid(),
                    discarded,
                    "merge discarded divergent history on the current branch"
                );
                writeln!(
                    self.writer(),
                    "Merged '{}' into '{}' by moving {} to {}; {} commit(s) no longer on '{}'",
                    name,
                    self.current_branch(),
                    from.to_short_oid(),
                    target.to_short_oid(),
                    discarded,
                    self.current_branch()
                )?;
            }
            _ => {
                tracing::debug!(branch = %name, to = %target, "fast-forward merge");
                writeln!(
                    self.writer(),
                    "Merged '{}' into '{}' (fast-forward to {})",
                    name,
                    self.current_branch(),
                    target.to_short_oid()
                )?;
            }
        }

        Ok(outcome)
    }

    /// Count commits reachable from `base` that are not part of `target`
    fn count_unmerged(&self, base: &ObjectId, target: &CommitGraph) -> Result<usize> {
        let mut count = 0;

        for commit in RevList::new(self.database(), Some(base.clone())) {
            if target.contains(commit?.hash()) {
                break;
            }
            count += 1;
        }

        Ok(count)
    }

    /// Rewrite each file with conflict markers around its current content
    ///
    /// Missing files are treated as empty. Returns the paths that were marked.
    pub fn mark_conflicts(&self, paths: &[String], branch: Option<&str>) -> Result<Vec<String>> {
        self.ensure_initialized()?;

        let branch = match branch {
            Some(branch) => BranchName::try_parse(branch)?,
            None => self.current_branch().clone(),
        };

        if paths.is_empty() {
            writeln!(self.writer(), "No merge conflicts.")?;
            return Ok(Vec::new());
        }

        writeln!(self.writer(), "Merge conflicts marked in the following files:")?;

        let mut marked = Vec::with_capacity(paths.len());
        for path in paths {
            let relative = self.relative_path(std::path::Path::new(path))?;
            let absolute = self.workspace_path(&relative);

            let content = String::from_utf8_lossy(&self.fs().read(&absolute)?).into_owned();
            let wrapped = conflict::wrap_in_markers(&content, branch.as_ref());
            self.fs().write(&absolute, wrapped.as_bytes())?;

            writeln!(self.writer(), "  {}", relative)?;
            marked.push(relative);
        }

        writeln!(self.writer(), "Resolve the conflicts manually, then add and commit.")?;

        Ok(marked)
    }
}
