use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Lazy history from HEAD back to the root commit
    ///
    /// Restarting means calling `log` again: the walk always begins at the
    /// persisted HEAD.
    pub fn log(&self) -> Result<RevList<'_>> {
        self.ensure_initialized()?;

        Ok(RevList::new(self.database(), self.refs().read_head()?))
    }

    pub fn show_log(&self, opts: &LogOptions) -> Result<()> {
        let decorations = self.branch_decorations()?;

        for commit in self.log()? {
            let commit = commit?;
            if opts.oneline {
                self.show_commit_oneline(&commit, &decorations)?;
            } else {
                self.show_commit_medium(&commit, &decorations)?;
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(
        &self,
        commit: &Commit,
        decorations: &HashMap<ObjectId, Vec<BranchName>>,
    ) -> Result<()> {
        writeln!(
            self.writer(),
            "{}{}",
            format!("commit {}", commit.hash()).yellow(),
            self.commit_decoration(commit, decorations)
        )?;
        writeln!(self.writer(), "Date:   {}", commit.timestamp())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "    {}", commit.message())?;
        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "    Files: {}",
            commit.files().collect::<Vec<_>>().join(" ")
        )?;

        Ok(())
    }

    fn show_commit_oneline(
        &self,
        commit: &Commit,
        decorations: &HashMap<ObjectId, Vec<BranchName>>,
    ) -> Result<()> {
        writeln!(
            self.writer(),
            "{}{} {}",
            commit.hash().to_short_oid().yellow(),
            self.commit_decoration(commit, decorations),
            commit.message()
        )?;

        Ok(())
    }

    fn commit_decoration(
        &self,
        commit: &Commit,
        decorations: &HashMap<ObjectId, Vec<BranchName>>,
    ) -> String {
        let is_head = self.head() == Some(commit.hash());
        let branches = decorations.get(commit.hash());

        let mut names = Vec::new();
        if let Some(branches) = branches {
            for branch in branches {
                if is_head && branch == self.current_branch() {
                    names.insert(0, format!("HEAD -> {}", branch).cyan().bold().to_string());
                } else {
                    names.push(branch.to_string().green().bold().to_string());
                }
            }
        }

        let head_is_detached = is_head
            && !branches.is_some_and(|branches| branches.contains(self.current_branch()));
        if head_is_detached {
            names.insert(0, "HEAD".cyan().bold().to_string());
        }

        if names.is_empty() {
            String::new()
        } else {
            format!(" ({})", names.join(", "))
        }
    }

    fn branch_decorations(&self) -> Result<HashMap<ObjectId, Vec<BranchName>>> {
        let mut decorations = HashMap::<ObjectId, Vec<BranchName>>::new();

        for branch in self.refs().list_branches()? {
            if let Some(oid) = self.refs().read_branch(&branch)? {
                decorations.entry(oid).or_default().push(branch);
            }
        }

        Ok(decorations)
    }
}
