// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.gitignore` access. The content is never parsed.

use std::path::Path;

use tracing::info;

use super::RepositoryService;
use crate::error::{FsError, ScopeResult};
use crate::git::handle::RepositoryHandle;

fn fs_error(path: &Path, source: std::io::Error) -> FsError {
    FsError::IoError {
        path: path.display().to_string(),
        source,
    }
}

impl RepositoryService {
    /// Returns the ignore file's content, creating it with `initial` first if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `FsError::IoError`.
    pub async fn open_ignore_file(
        &self,
        repo: &RepositoryHandle,
        initial: &str,
    ) -> ScopeResult<String> {
        repo.ensure_repository()?;
        let path = repo.ignore_file();

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| fs_error(&path, e))?;
        if !exists {
            tokio::fs::write(&path, initial)
                .await
                .map_err(|e| fs_error(&path, e))?;
            info!(path = %path.display(), "created ignore file");
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| fs_error(&path, e))?;
        Ok(content)
    }

    /// Overwrites the ignore file with `content`.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `FsError::IoError`.
    pub async fn save_ignore_file(&self, repo: &RepositoryHandle, content: &str) -> ScopeResult<()> {
        repo.ensure_repository()?;
        let path = repo.ignore_file();
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| fs_error(&path, e))?;
        info!(path = %path.display(), "saved ignore file");
        Ok(())
    }
}
