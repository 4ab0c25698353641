// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git invocation seam.
//!
//! ```text
//! RepositoryService / ScriptRunner
//!          |
//!          v
//!   dyn GitRunner ------------------------.
//!   .git(repo, args)                      |  (tests: ScriptedRunner)
//!   .shell(cwd, line)                     |
//!          |                              |
//!          v                              v
//!   ShellRunner                      canned replies
//!   git -C <repo> <args...>
//!   /bin/sh -c <line> | cmd /C <line>
//!          |
//!          v
//!   ProcessBuilder (ALLOW_FAILURE, capture_output)
//!          |
//!          v
//!   Classifier --> CommandResult
//! ```
//!
//! The runner never fails because git exited non-zero; that is encoded in
//! the returned [`CommandResult`]. It fails only when git could not be run
//! at all.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use super::classify::{Classifier, CommandResult};
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, RepoError, ScopeError, ScopeResult};

#[cfg(test)]
pub(crate) mod test_utils;

/// Environment applied to every child so git never prompts and always
/// prints the English messages the classifier matches.
const GIT_ENV: &[(&str, &str)] = &[
    ("GIT_TERMINAL_PROMPT", "0"),
    ("GCM_INTERACTIVE", "never"),
    ("LC_ALL", "C"),
];

/// Runs git and shell lines on behalf of the service layer.
///
/// Object-safe so the service can hold `Arc<dyn GitRunner>`.
pub trait GitRunner: Send + Sync {
    /// Runs `git -C <repo> <args...>`.
    fn git<'a>(&'a self, repo: &'a Path, args: &'a [&'a str])
    -> BoxFuture<'a, ScopeResult<CommandResult>>;

    /// Runs one raw command line through the platform shell in `cwd`.
    fn shell<'a>(&'a self, cwd: &'a Path, line: &'a str)
    -> BoxFuture<'a, ScopeResult<CommandResult>>;
}

/// [`GitRunner`] backed by real processes.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    git: PathBuf,
    classifier: Classifier,
}

impl ShellRunner {
    /// Uses the given git executable (name or path).
    pub fn new(git: impl Into<PathBuf>, classifier: Classifier) -> Self {
        Self {
            git: git.into(),
            classifier,
        }
    }

    /// Resolves `program` through PATH.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::ToolUnavailable` if it cannot be found.
    pub fn detect(program: &str, classifier: Classifier) -> ScopeResult<Self> {
        let path = Path::new(program);
        if path.is_absolute() && path.is_file() {
            return Ok(Self::new(path, classifier));
        }
        let resolved = ProcessBuilder::find(program).ok_or(RepoError::ToolUnavailable)?;
        Ok(Self::new(resolved, classifier))
    }

    /// Path of the git executable in use.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.git
    }

    async fn run_git(&self, repo: &Path, args: &[&str]) -> ScopeResult<CommandResult> {
        let builder = ProcessBuilder::new(&self.git)
            .arg("-C")
            .arg(repo)
            .args(args)
            .cwd(repo)
            .name("git");
        let output = Self::prepare(builder).run().await.map_err(tool_error)?;

        Ok(self.classifier.result(
            format!("git {}", args.join(" ")),
            output.success(),
            output.combined(),
        ))
    }

    async fn run_shell(&self, cwd: &Path, line: &str) -> ScopeResult<CommandResult> {
        let builder = ProcessBuilder::raw(line).cwd(cwd).name("shell");
        let output = Self::prepare(builder).run().await.map_err(tool_error)?;

        Ok(self
            .classifier
            .result(line, output.success(), output.combined()))
    }

    fn prepare(builder: ProcessBuilder) -> ProcessBuilder {
        GIT_ENV
            .iter()
            .fold(builder, |b, (key, value)| b.env(*key, *value))
            .flag(ProcessFlags::ALLOW_FAILURE)
            .capture_output()
    }
}

impl GitRunner for ShellRunner {
    fn git<'a>(
        &'a self,
        repo: &'a Path,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, ScopeResult<CommandResult>> {
        Box::pin(self.run_git(repo, args))
    }

    fn shell<'a>(&'a self, cwd: &'a Path, line: &'a str) -> BoxFuture<'a, ScopeResult<CommandResult>> {
        Box::pin(self.run_shell(cwd, line))
    }
}

/// Maps process-level failures onto the repository taxonomy.
fn tool_error(err: ScopeError) -> ScopeError {
    match err {
        ScopeError::Process(inner) => match *inner {
            ProcessError::ExecutableNotFound { .. } => RepoError::ToolUnavailable.into(),
            ProcessError::InvalidDirectory { path } => RepoError::InvalidDirectory { path }.into(),
            other => other.into(),
        },
        other => other,
    }
}
