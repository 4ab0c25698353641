// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ScopeError (~24 bytes)
//!                    |
//!   +--------+-------+-------+-------+-------+
//!   |        |       |       |       |       |
//!   v        v       v       v       v       v
//!  Repo   Process  Config    Fs      Io    Other
//!  Box     Box      Box     Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Repo    InvalidDirectory, InvalidRepository, ToolUnavailable,
//!           EmptyMessage, NothingStaged, EmptyReference,
//!           DirtyWorkingTree, MalformedRemoteSpec, UpstreamSetFailed,
//!           CommandFailed, RecoverySequenceFailed, ...
//!   Process InvalidDirectory, ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Config  ParseError, InvalidValue
//!   Fs      IoError
//!
//! All variants boxed => ScopeError fits in 24 bytes.
//! ```
//!
//! Every error that originates from a git invocation keeps the tool output
//! verbatim; [`ScopeError::raw_output`] digs it out for presentation layers.

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ScopeError`].
pub type ScopeResult<T> = std::result::Result<T, ScopeError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// Repository operation failed.
    #[error(transparent)]
    Repo(Box<RepoError>),

    // Not sources: each Display already carries the inner message.
    /// Process execution error.
    #[error("process error: {0}")]
    Process(Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ScopeError {
    /// Returns the repository error, if this is one.
    #[must_use]
    pub fn as_repo(&self) -> Option<&RepoError> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the raw tool output attached to this error, if any.
    #[must_use]
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            Self::Repo(err) => err.raw_output(),
            Self::Process(err) => err.raw_output(),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ScopeError {
                fn from(err: $error) -> Self {
                    ScopeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    RepoError => Repo,
    ProcessError => Process,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Repository Errors ---

/// Step of the push recovery sequence (checkout, pull, retried push).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    Checkout,
    Pull,
    RetryPush,
}

impl RecoveryStep {
    /// Short name used in error messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkout => "checkout",
            Self::Pull => "pull",
            Self::RetryPush => "push",
        }
    }
}

impl fmt::Display for RecoveryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by repository operations.
///
/// Precondition variants are produced without invoking git. Variants that
/// follow a git invocation carry its output verbatim.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Path does not exist or is not a directory.
    #[error("invalid directory path: {path}")]
    InvalidDirectory { path: String },

    /// Directory is not a git repository.
    #[error("invalid git repository path: {path}")]
    InvalidRepository { path: String },

    /// The git executable could not be found or started.
    #[error("git is not installed or not available in PATH")]
    ToolUnavailable,

    /// No active repository has been selected.
    #[error("no repository selected")]
    NoRepositorySelected,

    /// Commit message empty after trimming.
    #[error("commit message cannot be empty")]
    EmptyMessage,

    /// Nothing in the index to commit.
    #[error("no staged changes to commit")]
    NothingStaged,

    /// Commit reference empty after trimming.
    #[error("commit reference cannot be empty")]
    EmptyReference,

    /// Branch name empty after trimming.
    #[error("branch name cannot be empty")]
    EmptyBranchName,

    /// Clone URL empty after trimming.
    #[error("clone url cannot be empty")]
    EmptyUrl,

    /// Working tree still has changes once the revert cycle finished.
    #[error("uncommitted changes present, commit or stash them before reverting:\n{status}")]
    DirtyWorkingTree { status: String, revert_output: String },

    /// Remote text did not contain a name and a URL.
    #[error("usage: add <name> <url> (got '{input}')")]
    MalformedRemoteSpec { input: String },

    /// The local branch exists but pushing it upstream failed.
    #[error("branch '{branch}' created, but setting upstream failed:\n{output}")]
    UpstreamSetFailed { branch: String, output: String },

    /// Unstaged changes exist and nothing is staged.
    #[error("you have unstaged changes, stage them before pushing")]
    StageRequired,

    /// Staged changes exist that are not committed.
    #[error("you have staged files but no commit yet, commit before pushing")]
    CommitRequired,

    /// `HEAD~1` does not resolve.
    #[error("no previous commit to reset to:\n{output}")]
    NoPreviousCommit { output: String },

    /// Git ran and reported a failure that is not known to be benign.
    #[error("{command} failed:\n{output}")]
    CommandFailed { command: String, output: String },

    /// A step of the push recovery sequence failed.
    ///
    /// Renders the step's error followed by the rejected push output.
    #[error("push was rejected and {step} failed during recovery: {cause}\n\nrejected push output:\n{original}")]
    RecoverySequenceFailed {
        step: RecoveryStep,
        original: String,
        cause: Box<ScopeError>,
    },
}

impl RepoError {
    /// Returns the git output carried by this error, if any.
    #[must_use]
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. }
            | Self::UpstreamSetFailed { output, .. }
            | Self::NoPreviousCommit { output } => Some(output),
            Self::DirtyWorkingTree { status, .. } => Some(status),
            Self::RecoverySequenceFailed { cause, .. } => cause.raw_output(),
            _ => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge configuration sources.
    #[error("failed to load configuration: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Working directory missing or not a directory.
    #[error("working directory does not exist: {path}")]
    InvalidDirectory { path: String },

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit {
        command: String,
        code: i32,
        output: String,
    },

    /// Failed while waiting on the process.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Returns the captured output for a failed exit.
    #[must_use]
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            Self::NonZeroExit { output, .. } => Some(output),
            _ => None,
        }
    }
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
