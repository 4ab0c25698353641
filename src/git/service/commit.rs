// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working tree and history operations.
//!
//! ```text
//! commit(msg)
//!   msg.trim() empty ------------------> EmptyMessage   (no git call)
//!   rev-parse --is-inside-work-tree ---> InvalidRepository
//!   diff --cached --quiet exit 0 ------> NothingStaged
//!   commit -m <msg>
//!
//! revert(ref)
//!   stash --include-untracked
//!   revert --no-edit <ref>
//!   stash pop              (only if something was stashed; failure logged)
//!   status --porcelain     non-empty --> DirtyWorkingTree
//! ```

use tracing::{info, warn};

use super::{Outcome, RepositoryService, require};
use crate::error::{RepoError, ScopeResult};
use crate::git::classify::is_empty_stash;
use crate::git::handle::RepositoryHandle;
use crate::git::status::WorkingTreeState;

const STAGED: &str = "All changes staged successfully.";
const COMMITTED: &str = "Commit completed successfully.";
const REVERTED: &str = "Revert completed successfully.";

impl RepositoryService {
    /// Initializes a repository in the handle's directory.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` or `RepoError::CommandFailed`.
    pub async fn init(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        repo.ensure_directory()?;
        let result = self.git_checked(repo, &["init"]).await?;
        Ok(Outcome::from_result(&result, "Repository initialized."))
    }

    /// Shows `git status`.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn status(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        self.simple(repo, &["status"], "Working tree clean.").await
    }

    /// Stages every change (`git add .`).
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn stage(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        self.simple(repo, &["add", "."], STAGED).await
    }

    /// Commits the index with `message`.
    ///
    /// The message is checked before the repository so a blank message never
    /// reaches git, whatever the state of the directory.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyMessage`, `RepoError::NothingStaged`, a handle
    /// error, or `RepoError::CommandFailed`.
    pub async fn commit(&self, repo: &RepositoryHandle, message: &str) -> ScopeResult<Outcome> {
        repo.ensure_directory()?;
        let message = require(message, RepoError::EmptyMessage)?;
        repo.ensure_repository()?;

        let probe = self
            .git(repo, &["rev-parse", "--is-inside-work-tree"])
            .await?;
        if !probe.succeeded {
            return Err(RepoError::InvalidRepository {
                path: repo.to_string(),
            }
            .into());
        }

        // Exit 0 means the index matches HEAD; exit 1 with no output means
        // there is something to commit.
        let staged = self.git(repo, &["diff", "--cached", "--quiet"]).await?;
        if staged.succeeded {
            return Err(RepoError::NothingStaged.into());
        }
        if !staged.raw_output.trim().is_empty() {
            return Err(RepoError::CommandFailed {
                command: staged.command,
                output: staged.raw_output,
            }
            .into());
        }

        let result = self.git_checked(repo, &["commit", "-m", message]).await?;
        info!(repo = %repo, "committed");
        Ok(Outcome::from_result(&result, COMMITTED))
    }

    /// Shows `git log --oneline`.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed` (also for a
    /// repository without commits).
    pub async fn log(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        self.simple(repo, &["log", "--oneline"], "No commits yet.")
            .await
    }

    /// Shows `git reflog`.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn reflog(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        self.simple(repo, &["reflog"], "Reflog is empty.").await
    }

    /// Shows unstaged changes (`git diff`).
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn diff(&self, repo: &RepositoryHandle) -> ScopeResult<Outcome> {
        self.simple(repo, &["diff"], "No unstaged changes.").await
    }

    /// Lists paths in the index that differ from HEAD.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn staged_files(&self, repo: &RepositoryHandle) -> ScopeResult<Vec<String>> {
        repo.ensure_repository()?;
        let result = self
            .git_checked(repo, &["diff", "--cached", "--name-only"])
            .await?;
        Ok(result
            .raw_output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Reverts `reference`, shelving local changes around it.
    ///
    /// Local changes are stashed (untracked files included) before the
    /// revert and restored afterwards. A failed restore is only logged. If
    /// the tree is still dirty once the cycle finishes, the revert is
    /// reported as `DirtyWorkingTree` with git's status output.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyReference`, `RepoError::CommandFailed` (stash
    /// or revert failed), `RepoError::DirtyWorkingTree`, or a handle error.
    pub async fn revert(&self, repo: &RepositoryHandle, reference: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let reference = require(reference, RepoError::EmptyReference)?;

        let stash = self
            .git_checked(repo, &["stash", "--include-untracked"])
            .await?;
        let stashed = stash.succeeded && !is_empty_stash(&stash.raw_output);

        let revert = self.git(repo, &["revert", "--no-edit", reference]).await;

        if stashed {
            self.restore_stash(repo).await;
        }

        let revert = revert?.into_result()?;

        let status = self
            .git_checked(repo, &["status", "--porcelain"])
            .await?;
        if !status.raw_output.trim().is_empty() {
            return Err(RepoError::DirtyWorkingTree {
                status: status.raw_output,
                revert_output: revert.raw_output,
            }
            .into());
        }

        info!(repo = %repo, reference, "reverted");
        Ok(Outcome::from_result(&revert, REVERTED))
    }

    async fn restore_stash(&self, repo: &RepositoryHandle) {
        match self.git(repo, &["stash", "pop"]).await {
            Ok(pop) if pop.succeeded => {}
            Ok(pop) => warn!(repo = %repo, output = %pop.raw_output, "stash pop failed"),
            Err(err) => warn!(repo = %repo, error = %err, "stash pop failed"),
        }
    }

    /// Resolves `HEAD~1` to a commit id.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::NoPreviousCommit` when there is no parent commit.
    pub async fn previous_commit(&self, repo: &RepositoryHandle) -> ScopeResult<String> {
        repo.ensure_repository()?;
        let result = self.git(repo, &["rev-parse", "HEAD~1"]).await?;
        if !result.succeeded {
            return Err(RepoError::NoPreviousCommit {
                output: result.raw_output,
            }
            .into());
        }
        Ok(result.raw_output.trim().to_string())
    }

    /// Moves HEAD to `reference`, keeping changes staged.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::EmptyReference`, a handle error, or
    /// `RepoError::CommandFailed`.
    pub async fn reset_soft(&self, repo: &RepositoryHandle, reference: &str) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let reference = require(reference, RepoError::EmptyReference)?;
        let result = self
            .git_checked(repo, &["reset", "--soft", reference])
            .await?;
        Ok(Outcome::from_result(&result, &format!("Reset to {reference}.")))
    }

    /// Summarizes `git status --porcelain`.
    ///
    /// # Errors
    ///
    /// Returns a handle error or `RepoError::CommandFailed`.
    pub async fn working_tree_state(&self, repo: &RepositoryHandle) -> ScopeResult<WorkingTreeState> {
        repo.ensure_repository()?;
        let result = self
            .git_checked(repo, &["status", "--porcelain"])
            .await?;
        Ok(WorkingTreeState::parse(&result.raw_output))
    }

    /// Checks nothing is left to stage or commit before a push.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::StageRequired` or `RepoError::CommitRequired`.
    pub async fn check_push_ready(&self, repo: &RepositoryHandle) -> ScopeResult<()> {
        self.working_tree_state(repo).await?.ensure_push_ready()
    }
}
