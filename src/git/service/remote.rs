// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote management.
//!
//! ```text
//! remote_add("git remote add origin <url>")
//!   RemoteSpec::parse ---- < 2 tokens --> MalformedRemoteSpec
//!   name == origin? --> remote remove origin (result ignored)
//!   remote add <name> <url>
//! ```

use tracing::debug;

use super::{Outcome, RepositoryService, require};
use crate::error::{RepoError, ScopeResult};
use crate::git::handle::RepositoryHandle;
use crate::git::remote_spec::{ORIGIN, Remote, RemoteSpec};

impl RepositoryService {
    /// Lists configured remotes (`remote -v`).
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn remote_list(&self, repo: &RepositoryHandle) -> ScopeResult<Vec<Remote>> {
        repo.ensure_repository()?;
        let result = self.git_checked(repo, &["remote", "-v"]).await?;
        Ok(Remote::parse_list(&result.raw_output))
    }

    /// Adds a remote from pasted text, replacing `origin` if it exists.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::MalformedRemoteSpec`, a handle error, or
    /// `RepoError::CommandFailed`.
    pub async fn remote_add(&self, repo: &RepositoryHandle, input: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let spec = RemoteSpec::parse(input)?;

        if spec.is_origin() {
            match self.git(repo, &["remote", "remove", ORIGIN]).await {
                Ok(removed) if removed.succeeded => debug!(repo = %repo, "replacing origin"),
                Ok(removed) => debug!(repo = %repo, output = %removed.raw_output, "no origin to remove"),
                Err(err) => debug!(repo = %repo, error = %err, "origin removal skipped"),
            }
        }

        self.git_checked(repo, &["remote", "add", spec.name.as_str(), spec.url.as_str()])
            .await?;
        Ok(Outcome::new(format!(
            "Remote '{}' added: {}",
            spec.name, spec.url
        )))
    }

    /// Removes a remote.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::MalformedRemoteSpec` for a blank name, a handle
    /// error, or `RepoError::CommandFailed`.
    pub async fn remote_remove(&self, repo: &RepositoryHandle, name: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let name = require(
            name,
            RepoError::MalformedRemoteSpec {
                input: name.to_string(),
            },
        )?;
        let result = self.git_checked(repo, &["remote", "remove", name]).await?;
        Ok(Outcome::from_result(&result, &format!("Remote '{name}' removed")))
    }
}
