// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository operations.
//!
//! ```text
//! RepositoryService::op(&handle, ...)
//!   1. handle checks       InvalidDirectory / InvalidRepository
//!   2. preconditions       EmptyMessage, EmptyReference, NothingStaged, ...
//!   3. git via GitRunner   CommandResult { classification }
//!   4. Outcome { message, classification } or RepoError
//!
//! commit.rs   status, stage, commit, log, reflog, diff, revert, reset
//! sync.rs     push (non-fast-forward recovery), pull, clone
//! branch.rs   create, delete, rename, switch, list
//! remote.rs   list, add (origin replace), remove
//! ignore.rs   .gitignore open / save
//! ```
//!
//! Sub-steps of one operation are awaited in order. Nothing serializes two
//! operations against the same repository; git's own locks are all there is.

mod branch;
mod commit;
mod ignore;
mod remote;
mod sync;

use std::sync::Arc;

use bon::Builder;
use serde::Serialize;
use tracing::debug;

use super::backend::GitRunner;
use super::classify::{Classification, CommandResult};
use super::handle::RepositoryHandle;
use super::remote_spec::ORIGIN;
use crate::error::{RepoError, ScopeResult};

pub use sync::PullMode;

/// Tunables for [`RepositoryService`].
#[derive(Debug, Clone, Builder)]
pub struct ServiceOptions {
    /// Remote used by push, pull and upstream tracking.
    #[builder(into, setters(name = with_remote), default = String::from(ORIGIN))]
    remote: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ServiceOptions {
    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }
}

/// User-facing result of a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub message: String,
    pub classification: Classification,
}

impl Outcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            classification: Classification::Success,
        }
    }

    /// Uses git's own output, or `default` when git printed nothing.
    #[must_use]
    pub fn from_result(result: &CommandResult, default: &str) -> Self {
        Self {
            message: result.message_or(default),
            classification: result.classification,
        }
    }

    /// Uses `message` on success; a benign warning keeps git's output.
    #[must_use]
    pub fn synthesized(result: &CommandResult, message: impl Into<String>) -> Self {
        match result.classification {
            Classification::BenignWarning => Self::from_result(result, ""),
            _ => Self::new(message),
        }
    }
}

/// Orchestrates git operations against a repository handle.
///
/// Cheap to clone; clones share the runner.
#[derive(Clone)]
pub struct RepositoryService {
    runner: Arc<dyn GitRunner>,
    options: ServiceOptions,
}

impl std::fmt::Debug for RepositoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryService")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RepositoryService {
    pub fn new(runner: Arc<dyn GitRunner>, options: ServiceOptions) -> Self {
        Self { runner, options }
    }

    #[must_use]
    pub const fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// The runner, shared with the script runner for raw shell lines.
    #[must_use]
    pub fn runner(&self) -> &Arc<dyn GitRunner> {
        &self.runner
    }

    /// Runs git and returns the classified result, whatever the exit code.
    async fn git(&self, repo: &RepositoryHandle, args: &[&str]) -> ScopeResult<CommandResult> {
        debug!(repo = %repo, args = ?args, "git");
        self.runner.git(repo.path(), args).await
    }

    /// Runs git and raises `CommandFailed` for a real failure.
    async fn git_checked(
        &self,
        repo: &RepositoryHandle,
        args: &[&str],
    ) -> ScopeResult<CommandResult> {
        self.git(repo, args).await?.into_result()
    }

    /// Repository-scoped single invocation with a fallback message.
    async fn simple(
        &self,
        repo: &RepositoryHandle,
        args: &[&str],
        default: &str,
    ) -> ScopeResult<Outcome> {
        repo.ensure_repository()?;
        let result = self.git_checked(repo, args).await?;
        Ok(Outcome::from_result(&result, default))
    }
}

/// Trims `value`, failing with `err` when nothing is left.
fn require<'a>(value: &'a str, err: RepoError) -> ScopeResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err.into())
    } else {
        Ok(trimmed)
    }
}
