use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

/// One entry of the branch listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchListing {
    pub name: BranchName,
    pub target: Option<ObjectId>,
    pub is_current: bool,
}

impl Repository {
    /// Create a branch pointing at the current HEAD (possibly empty)
    pub fn create_branch(&mut self, name: &str) -> Result<Option<ObjectId>> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name)?;
        let target = self.head().cloned();
        self.refs().create_branch(&name, target.as_ref())?;

        tracing::debug!(branch = %name, target = ?target.as_ref().map(ObjectId::to_short_oid), "created branch");
        writeln!(self.writer(), "Created branch '{}'", name)?;

        Ok(target)
    }

    /// Make `name` the current branch and move HEAD to its target
    ///
    /// The target's whole history is loaded before anything is persisted.
    pub fn switch_branch(&mut self, name: &str) -> Result<Option<ObjectId>> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name)?;
        let target = self.refs().read_branch(&name)?;

        if let Some(oid) = &target {
            self.database().load_chain(oid)?;
        }

        let already_on = &name == self.current_branch() && target.as_ref() == self.head();

        self.set_head(target.clone())?;
        self.refs().set_current_branch(&name)?;
        self.state_mut().current_branch = name.clone();

        tracing::debug!(branch = %name, "switched branch");
        if already_on {
            writeln!(self.writer(), "Already on '{}'", name)?;
        } else {
            writeln!(self.writer(), "Switched to branch '{}'", name)?;
        }

        Ok(target)
    }

    /// Every known branch, sorted by name, with the current one marked
    pub fn list_branches(&self) -> Result<Vec<BranchListing>> {
        self.ensure_initialized()?;

        self.refs()
            .list_branches()?
            .into_iter()
            .map(|name| -> Result<BranchListing> {
                Ok(BranchListing {
                    target: self.refs().read_branch(&name)?,
                    is_current: &name == self.current_branch(),
                    name,
                })
            })
            .collect()
    }

    pub fn show_branches(&self) -> Result<()> {
        for branch in self.list_branches()? {
            let target = branch
                .target
                .as_ref()
                .map(ObjectId::to_short_oid)
                .unwrap_or_else(|| "(no commits)".to_string());

            if branch.is_current {
                writeln!(
                    self.writer(),
                    "* {} {}",
                    branch.name.to_string().green(),
                    target
                )?;
            } else {
                writeln!(self.writer(), "  {} {}", branch.name, target)?;
            }
        }

        Ok(())
    }
}
