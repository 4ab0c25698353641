// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote synchronization: push, pull, clone.
//!
//! ```text
//! push -u origin <branch>
//!   |
//!   +-- accepted ----------------------------------------> Outcome
//!   +-- other failure -----------------------------------> CommandFailed
//!   +-- rejected (non-fast-forward / behind its remote)
//!         |
//!         v
//!       checkout <branch> ------ fails --> RecoverySequenceFailed(checkout)
//!         |
//!         v
//!       pull origin <branch> --no-edit -- fails --> RecoverySequenceFailed(pull)
//!         |
//!         v
//!       push -u origin <branch> -- fails --> RecoverySequenceFailed(push)
//!         |
//!         v
//!       Outcome
//! ```

use serde::Serialize;
use tracing::{info, warn};

use super::{Outcome, RepositoryService, require};
use crate::error::{RecoveryStep, RepoError, ScopeResult};
use crate::git::classify::{Classification, CommandResult, is_non_fast_forward};
use crate::git::handle::RepositoryHandle;

const PUSHED: &str = "Repository pushed successfully.";
const CLONED: &str = "Successfully cloned the repository.";
const RESET_AND_PULLED: &str = "Last commit reset and pull completed successfully.";

/// What to do before pulling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PullMode {
    /// Plain `git pull`.
    #[default]
    Merge,
    /// Soft-reset the last local commit first, keeping its changes staged.
    ResetLastCommit,
}

impl RepositoryService {
    /// Pushes `branch` with upstream tracking, recovering once from a
    /// non-fast-forward rejection by pulling and retrying.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyBranchName`, `RepoError::CommandFailed` for a
    /// rejection that is not a non-fast-forward, or
    /// `RepoError::RecoverySequenceFailed` naming the step that failed along
    /// with the original push output.
    pub async fn push(&self, repo: &RepositoryHandle, branch: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let branch = require(branch, RepoError::EmptyBranchName)?;
        let push_args = ["push", "-u", self.options.remote(), branch];

        let attempt = self.git(repo, &push_args).await?;
        if attempt.succeeded {
            info!(repo = %repo, branch, "pushed");
            return Ok(Outcome::from_result(&attempt, PUSHED));
        }
        if !is_non_fast_forward(&attempt.raw_output) {
            let attempt = attempt.into_result()?;
            return Ok(Outcome::from_result(&attempt, PUSHED));
        }

        warn!(repo = %repo, branch, "push rejected as non-fast-forward, pulling before retry");
        let pull_args = ["pull", self.options.remote(), branch, "--no-edit"];

        self.recovery_step(repo, RecoveryStep::Checkout, &["checkout", branch], &attempt)
            .await?;
        self.recovery_step(repo, RecoveryStep::Pull, &pull_args, &attempt)
            .await?;
        let retry = self
            .recovery_step(repo, RecoveryStep::RetryPush, &push_args, &attempt)
            .await?;

        info!(repo = %repo, branch, "pushed after pull");
        Ok(Outcome::from_result(&retry, PUSHED))
    }

    /// Runs one step of the push recovery, tagging a failure with the step
    /// and the rejected push output.
    async fn recovery_step(
        &self,
        repo: &RepositoryHandle,
        step: RecoveryStep,
        args: &[&str],
        original: &CommandResult,
    ) -> ScopeResult<CommandResult> {
        let result = match self.git(repo, args).await {
            Ok(result) => result.into_result(),
            Err(err) => Err(err),
        };
        result.map_err(|cause| {
            RepoError::RecoverySequenceFailed {
                step,
                original: original.raw_output.clone(),
                cause: Box::new(cause),
            }
            .into()
        })
    }

    /// Pulls `branch` from the configured remote.
    ///
    /// With [`PullMode::ResetLastCommit`] the last commit is soft-reset
    /// first, so its changes come back staged on top of the pulled history.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyBranchName`, `RepoError::NoPreviousCommit`,
    /// a handle error, or `RepoError::CommandFailed`.
    pub async fn pull(
        &self,
        repo: &RepositoryHandle,
        branch: &str,
        mode: PullMode,
    ) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let branch = require(branch, RepoError::EmptyBranchName)?;

        if mode == PullMode::ResetLastCommit {
            let previous = self.previous_commit(repo).await?;
            self.reset_soft(repo, &previous).await?;
        }

        let result = self
            .git_checked(repo, &["pull", self.options.remote(), branch])
            .await?;

        let message = match mode {
            PullMode::Merge => format!("Successfully pulled branch: {branch}"),
            PullMode::ResetLastCommit => RESET_AND_PULLED.to_string(),
        };
        Ok(Outcome::synthesized(&result, message))
    }

    /// Clones `url` into the handle's directory.
    ///
    /// The handle does not need to be a repository. An existing destination
    /// is reported as a benign warning with git's message.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyUrl`, `RepoError::InvalidDirectory`, or
    /// `RepoError::CommandFailed`.
    pub async fn clone_repository(&self, repo: &RepositoryHandle, url: &str) -> ScopeResult<Outcome> {
        repo.ensure_directory()?;
        let url = require(url, RepoError::EmptyUrl)?;
        let result = self.git_checked(repo, &["clone", url]).await?;
        if result.classification == Classification::Success {
            info!(repo = %repo, url, "cloned");
        }
        Ok(Outcome::synthesized(&result, CLONED))
    }
}
