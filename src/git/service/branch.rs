// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch operations.

use tracing::info;

use super::{Outcome, RepositoryService, require};
use crate::error::{RepoError, ScopeResult};
use crate::git::branches::BranchList;
use crate::git::handle::RepositoryHandle;

impl RepositoryService {
    /// Creates `name` locally, then pushes it with upstream tracking.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::CommandFailed` if the branch cannot be created and
    /// `RepoError::UpstreamSetFailed` if it was created but the push failed.
    pub async fn create_branch(&self, repo: &RepositoryHandle, name: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let name = require(name, RepoError::EmptyBranchName)?;

        self.git_checked(repo, &["branch", name]).await?;

        let upstream = self
            .git(repo, &["push", "-u", self.options.remote(), name])
            .await?;
        if upstream.is_failure() {
            return Err(RepoError::UpstreamSetFailed {
                branch: name.to_string(),
                output: upstream.raw_output,
            }
            .into());
        }

        info!(repo = %repo, branch = name, "branch created");
        Ok(Outcome::new(format!("Created branch '{name}' and set upstream")))
    }

    /// Deletes a merged branch (`branch -d`).
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyBranchName`, a handle error, or
    /// `RepoError::CommandFailed` (unmerged or current branch).
    pub async fn delete_branch(&self, repo: &RepositoryHandle, name: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let name = require(name, RepoError::EmptyBranchName)?;
        let result = self.git_checked(repo, &["branch", "-d", name]).await?;
        Ok(Outcome::from_result(&result, &format!("Deleted branch '{name}'")))
    }

    /// Renames `old` to `new` (`branch -m`).
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyBranchName`, a handle error, or
    /// `RepoError::CommandFailed`.
    pub async fn rename_branch(
        &self,
        repo: &RepositoryHandle,
        old: &str,
        new: &str,
    ) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let old = require(old, RepoError::EmptyBranchName)?;
        let new = require(new, RepoError::EmptyBranchName)?;
        let result = self.git_checked(repo, &["branch", "-m", old, new]).await?;
        Ok(Outcome::from_result(
            &result,
            &format!("Branch renamed from {old} to {new}"),
        ))
    }

    /// Checks out `name` (`switch`).
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyBranchName`, a handle error, or
    /// `RepoError::CommandFailed`.
    pub async fn switch_branch(&self, repo: &RepositoryHandle, name: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let name = require(name, RepoError::EmptyBranchName)?;
        let result = self.git_checked(repo, &["switch", name]).await?;
        Ok(Outcome::from_result(&result, &format!("Switched to branch {name}")))
    }

    /// Lists local branches in git's order.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn list_branches(&self, repo: &RepositoryHandle) -> ScopeResult<BranchList> {
        repo.ensure_repository()?;
        let result = self.git_checked(repo, &["branch", "--list"]).await?;
        Ok(BranchList::parse(&result.raw_output))
    }
}
