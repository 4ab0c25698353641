// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pasted multi-line scripts.
//!
//! ```text
//! text --> lines().map(ScriptLine::parse)
//!   Blank               skipped
//!   Commit { message }  RepositoryService::commit
//!   Command(line)       GitRunner::shell in the repository directory
//!        |
//!        v
//!   Succeeded | Ignored (benign) | Failed
//!        |
//!        v
//!   AggregateReport
//! ```
//!
//! Lines run strictly one after another; a later line may depend on an
//! earlier one (add the remote, then push).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{RepoError, ScopeError, ScopeResult};
use crate::git::classify::{Classification, Classifier};
use crate::git::handle::RepositoryHandle;
use crate::git::service::RepositoryService;

const ALL_SUCCEEDED: &str = "All commands executed successfully.";
const FAILURE_HEADER: &str = "Some commands failed:";

/// `git commit ...` at the start of a line.
static COMMIT_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^git\s+commit(?:\s|$)").ok());

/// The first message argument: `-m`, a short-option cluster ending in `m`
/// (`-am`), or `--message`. The value is a double-quoted, single-quoted
/// or bare word.
static MESSAGE_ARG: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(?:-[A-Za-z]*?m|--message)(?:=|\s*)(?:"([^"]*)"|'([^']*)'|(\S+))"#).ok()
});

/// One classified line of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptLine {
    Blank,
    Commit { message: String },
    Command { line: String },
}

impl ScriptLine {
    /// Classifies one raw line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Self::Blank;
        }
        if COMMIT_LINE.as_ref().is_some_and(|re| re.is_match(line)) {
            let message = MESSAGE_ARG
                .as_ref()
                .and_then(|re| re.captures(line))
                .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            return Self::Commit { message };
        }
        Self::Command {
            line: line.to_string(),
        }
    }

    /// Parses every line of `text`, blanks included.
    #[must_use]
    pub fn parse_script(text: &str) -> Vec<Self> {
        text.lines().map(Self::parse).collect()
    }
}

/// How a line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    Succeeded,
    /// Failed with output on the benign list; not counted.
    Ignored,
    Failed,
}

/// Result of one executed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// The trimmed line as written.
    pub line: String,
    pub status: LineStatus,
    pub output: String,
}

/// Per-line outcomes in script order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub outcomes: Vec<LineOutcome>,
}

impl AggregateReport {
    /// True when no line failed. Ignored lines do not count as failures.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|o| o.status == LineStatus::Failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == LineStatus::Failed)
    }

    /// Every failing line followed by its output, or `None` if nothing failed.
    #[must_use]
    pub fn failure_report(&self) -> Option<String> {
        let entries: Vec<String> = self
            .failures()
            .map(|o| format!("{}\n{}", o.line, o.output))
            .collect();
        if entries.is_empty() {
            None
        } else {
            Some(format!("{FAILURE_HEADER}\n\n{}", entries.join("\n\n")))
        }
    }

    /// The failure report, or the all-clear message.
    #[must_use]
    pub fn summary(&self) -> String {
        self.failure_report()
            .unwrap_or_else(|| ALL_SUCCEEDED.to_string())
    }
}

/// Runs scripts against a repository directory.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    service: RepositoryService,
    classifier: Classifier,
}

impl ScriptRunner {
    pub fn new(service: RepositoryService, classifier: Classifier) -> Self {
        Self {
            service,
            classifier,
        }
    }

    /// Runs every non-blank line of `text` in order.
    ///
    /// Individual line failures are collected in the report, not raised.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` if the directory is gone.
    pub async fn run(&self, repo: &RepositoryHandle, text: &str) -> ScopeResult<AggregateReport> {
        repo.ensure_directory()?;

        let mut report = AggregateReport::default();
        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let outcome = match ScriptLine::parse(line) {
                ScriptLine::Blank => continue,
                ScriptLine::Commit { message } => self.run_commit(repo, line, &message).await,
                ScriptLine::Command { line } => self.run_command(repo, &line).await,
            };
            debug!(line = number + 1, status = ?outcome.status, "script line finished");
            report.outcomes.push(outcome);
        }

        if report.succeeded() {
            info!(repo = %repo, lines = report.outcomes.len(), "script completed");
        } else {
            warn!(repo = %repo, failed = report.failures().count(), "script completed with failures");
        }
        Ok(report)
    }

    async fn run_commit(&self, repo: &RepositoryHandle, line: &str, message: &str) -> LineOutcome {
        let (status, output) = match self.service.commit(repo, message).await {
            Ok(outcome) => (LineStatus::Succeeded, outcome.message),
            Err(err) => self.classify_error(&err),
        };
        LineOutcome {
            line: line.to_string(),
            status,
            output,
        }
    }

    async fn run_command(&self, repo: &RepositoryHandle, line: &str) -> LineOutcome {
        let (status, output) = match self.service.runner().shell(repo.path(), line).await {
            Ok(result) => {
                let status = match result.classification {
                    Classification::Success => LineStatus::Succeeded,
                    Classification::BenignWarning => LineStatus::Ignored,
                    Classification::Failure => LineStatus::Failed,
                };
                (status, result.raw_output)
            }
            Err(err) => (LineStatus::Failed, err.to_string()),
        };
        LineOutcome {
            line: line.to_string(),
            status,
            output,
        }
    }

    fn classify_error(&self, err: &ScopeError) -> (LineStatus, String) {
        let output = err
            .raw_output()
            .map_or_else(|| err.to_string(), String::from);
        let benign = matches!(err.as_repo(), Some(RepoError::NothingStaged))
            || self.classifier.is_benign(&output);
        let status = if benign {
            LineStatus::Ignored
        } else {
            LineStatus::Failed
        };
        (status, output)
    }
}
