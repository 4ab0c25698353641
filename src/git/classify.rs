// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Outcome classification for git output.
//!
//! ```text
//! exit code + output text
//!        |
//!        v
//!   Classifier::classify()
//!        |
//!   exit 0 ------------------------------> Success
//!   output contains a benign pattern ----> BenignWarning
//!   otherwise ---------------------------> Failure
//! ```
//!
//! Matching git's English messages is the only signal git gives for these
//! cases. Everything that looks at output text goes through this module so
//! it can be replaced in one place.

use serde::Serialize;
use tracing::warn;

use crate::error::{RepoError, ScopeResult};

/// Output fragments that mean "nothing happened" rather than "it broke".
pub const BENIGN_PATTERNS: &[&str] = &[
    "no changes added to commit",
    "no staged changes to commit",
    "nothing to commit",
    "already exists",
    "fatal: destination path",
];

/// Push rejection markers that trigger the pull-and-retry sequence.
const NON_FAST_FORWARD_PATTERNS: &[&str] = &["non-fast-forward", "behind its remote"];

/// Stash output when the working tree was clean.
const EMPTY_STASH_PATTERN: &str = "No local changes to save";

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Success,
    BenignWarning,
    Failure,
}

/// Decides the [`Classification`] of an invocation.
///
/// Carries the built-in [`BENIGN_PATTERNS`] plus any extra patterns from
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    extra: Vec<String>,
}

impl Classifier {
    /// Creates a classifier with extra benign patterns on top of the defaults.
    #[must_use]
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.trim().is_empty())
                .collect(),
        }
    }

    /// Returns true if the output contains a known benign pattern.
    #[must_use]
    pub fn is_benign(&self, output: &str) -> bool {
        BENIGN_PATTERNS.iter().any(|p| output.contains(p))
            || self.extra.iter().any(|p| output.contains(p.as_str()))
    }

    /// Classifies an exit status and its output.
    #[must_use]
    pub fn classify(&self, succeeded: bool, output: &str) -> Classification {
        if succeeded {
            Classification::Success
        } else if self.is_benign(output) {
            Classification::BenignWarning
        } else {
            Classification::Failure
        }
    }

    /// Builds a [`CommandResult`] for a finished invocation.
    #[must_use]
    pub fn result(
        &self,
        command: impl Into<String>,
        succeeded: bool,
        raw_output: impl Into<String>,
    ) -> CommandResult {
        let raw_output = raw_output.into();
        let classification = self.classify(succeeded, &raw_output);
        CommandResult {
            command: command.into(),
            raw_output,
            succeeded,
            classification,
        }
    }
}

/// Result of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Command line shown in errors, e.g. `git push -u origin main`.
    pub command: String,
    /// Combined stdout and stderr, verbatim.
    pub raw_output: String,
    /// Exit status was zero.
    pub succeeded: bool,
    pub classification: Classification,
}

impl CommandResult {
    /// Returns true for a real failure (not benign).
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.classification == Classification::Failure
    }

    /// Turns a real failure into `RepoError::CommandFailed`.
    ///
    /// Benign warnings are absorbed and logged.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::CommandFailed` carrying the raw output.
    pub fn into_result(self) -> ScopeResult<Self> {
        match self.classification {
            Classification::Success => Ok(self),
            Classification::BenignWarning => {
                warn!(cmd = %self.command, output = %self.raw_output, "benign failure absorbed");
                Ok(self)
            }
            Classification::Failure => Err(RepoError::CommandFailed {
                command: self.command,
                output: self.raw_output,
            }
            .into()),
        }
    }

    /// Returns the trimmed output, or `default` when git printed nothing.
    #[must_use]
    pub fn message_or(&self, default: &str) -> String {
        let trimmed = self.raw_output.trim();
        if trimmed.is_empty() {
            default.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Returns true if push output reports a non-fast-forward rejection.
#[must_use]
pub fn is_non_fast_forward(output: &str) -> bool {
    NON_FAST_FORWARD_PATTERNS.iter().any(|p| output.contains(p))
}

/// Returns true if `git stash` output says there was nothing to stash.
#[must_use]
pub fn is_empty_stash(output: &str) -> bool {
    output.contains(EMPTY_STASH_PATTERN)
}
