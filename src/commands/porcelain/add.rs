use crate::areas::repository::{REPOSITORY_DIR, Repository};
use crate::artifacts::objects::hasher;
use crate::artifacts::staging::staged_file::StagedFile;
use crate::errors::{Result, VcsError};
use std::path::Path;

impl Repository {
    /// Stage files, expanding directories into every file beneath them
    ///
    /// All paths are checked before anything is staged, so a missing path
    /// leaves the staging set untouched.
    pub fn add(&mut self, paths: &[String]) -> Result<Vec<StagedFile>> {
        self.ensure_initialized()?;

        let files = paths
            .iter()
            .map(|path| self.expand_path(Path::new(path)))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            let content = self.fs().read(&self.workspace_path(&file))?;
            let entry = StagedFile::new(file, hasher::hash(&content));

            self.state_mut().staging.stage(entry.clone())?;
            tracing::debug!(path = %entry.path, hash = %entry.hash.to_short_oid(), "staged file");
            staged.push(entry);
        }

        Ok(staged)
    }

    fn expand_path(&self, path: &Path) -> Result<Vec<String>> {
        let relative = self.relative_path(path)?;
        let absolute = self.workspace_path(&relative);

        if Self::is_repository_internal(&relative) || !self.fs().exists(&absolute) {
            return Err(VcsError::not_found("file", path.to_string_lossy()));
        }

        let files = if self.fs().is_dir(&absolute) {
            self.fs()
                .list_directory(&absolute)?
                .into_iter()
                .map(|file| -> Result<String> {
                    let file = self.relative_path(&file)?;
                    Ok(if relative.is_empty() {
                        file
                    } else {
                        format!("{relative}/{file}")
                    })
                })
                .filter(|file| !file.as_ref().is_ok_and(|f| Self::is_repository_internal(f)))
                .collect::<Result<Vec<_>>>()?
        } else {
            vec![relative]
        };

        // staging and commit records are line based
        if let Some(file) = files.iter().find(|file| file.contains(['\n', '\r'])) {
            return Err(VcsError::InvalidPath {
                path: file.clone(),
                reason: "contains a line break",
            });
        }

        Ok(files)
    }

    fn is_repository_internal(relative: &str) -> bool {
        relative == REPOSITORY_DIR || relative.starts_with(&format!("{REPOSITORY_DIR}/"))
    }
}
