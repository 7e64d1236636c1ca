use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_entry::DiffEntry;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Staged entries paired with the hash HEAD recorded for the same path
    pub fn diff(&self) -> Result<Vec<DiffEntry>> {
        self.ensure_initialized()?;

        let head_commit = match self.head() {
            Some(oid) => Some(self.database().load(oid)?),
            None => None,
        };

        Ok(self
            .staging()
            .entries()
            .iter()
            .map(|staged| {
                let previous = head_commit
                    .as_ref()
                    .and_then(|commit| commit.entry(&staged.path))
                    .and_then(|entry| entry.hash.clone());
                DiffEntry::new(staged.path.clone(), staged.hash.clone(), previous)
            })
            .collect())
    }

    pub fn show_diff(&self) -> Result<()> {
        let entries = self.diff()?;

        if entries.is_empty() {
            writeln!(self.writer(), "No staged changes")?;
            return Ok(());
        }

        for entry in entries {
            writeln!(self.writer(), "{}", format!("staged {}", entry.path).bold())?;
            match &entry.previous {
                Some(previous) if !entry.is_changed() => {
                    writeln!(self.writer(), "    unchanged {}", previous)?;
                }
                Some(previous) => {
                    writeln!(self.writer(), "{}", format!("--- {}", previous).red())?;
                    writeln!(self.writer(), "{}", format!("+++ {}", entry.hash).green())?;
                }
                None => {
                    writeln!(self.writer(), "{}", "--- (new file)".red())?;
                    writeln!(self.writer(), "{}", format!("+++ {}", entry.hash).green())?;
                }
            }
        }

        Ok(())
    }
}
