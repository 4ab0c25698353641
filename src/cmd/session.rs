// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-invocation state shared by the command handlers.
//!
//! ```text
//! Config --> Classifier (built-in + script.benign_patterns)
//!        --> ShellRunner::detect(git.executable)
//!        --> RepositoryService (git.remote)
//!        --> repository path (--repo | repository.path | cwd)
//!                 |
//!                 v
//!        select() --> ActiveRepository --> snapshot
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::error::{Result, ScopeResult};
use crate::git::{
    ActiveRepository, Classification, Classifier, GitRunner, Outcome, RepositoryHandle,
    RepositoryService, ServiceOptions, ShellRunner,
};

/// Everything a command handler needs.
pub struct Session {
    config: Config,
    classifier: Classifier,
    service: RepositoryService,
    repo_path: PathBuf,
    active: ActiveRepository,
}

impl Session {
    /// Builds a session around the git executable named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::ToolUnavailable` if git cannot be found, or an
    /// error if the current directory cannot be determined.
    pub fn new(config: &Config) -> Result<Self> {
        let classifier = Classifier::with_patterns(config.script.benign_patterns.iter().cloned());
        let program = config.git.executable.to_string_lossy();
        let runner = ShellRunner::detect(&program, classifier.clone())?;
        tracing::debug!(git = %runner.executable().display(), "git executable resolved");
        Self::with_runner(config, Arc::new(runner))
    }

    /// Builds a session around an existing runner.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository path is configured and the current
    /// directory cannot be determined.
    pub fn with_runner(config: &Config, runner: Arc<dyn GitRunner>) -> Result<Self> {
        let classifier = Classifier::with_patterns(config.script.benign_patterns.iter().cloned());
        let options = ServiceOptions::builder()
            .with_remote(config.git.remote.clone())
            .build();
        let repo_path = match &config.repository.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self {
            config: config.clone(),
            classifier,
            service: RepositoryService::new(runner, options),
            repo_path,
            active: ActiveRepository::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    #[must_use]
    pub const fn service(&self) -> &RepositoryService {
        &self.service
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Validates the repository directory, makes it active and returns a
    /// snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` if the path is not a directory.
    pub fn select(&self) -> ScopeResult<RepositoryHandle> {
        self.activate(RepositoryHandle::open(&self.repo_path)?)
    }

    /// Like [`Session::select`], creating the directory first if needed.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` if the directory cannot be created.
    pub fn select_or_create(&self) -> ScopeResult<RepositoryHandle> {
        self.activate(RepositoryHandle::create(&self.repo_path)?)
    }

    fn activate(&self, handle: RepositoryHandle) -> ScopeResult<RepositoryHandle> {
        if let Some(previous) = self.active.set(handle) {
            tracing::debug!(previous = %previous, "replaced active repository");
        }
        self.active.snapshot()
    }
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Awaits `fut` behind a stderr spinner. Hidden when stderr is not a terminal.
pub async fn with_spinner<F, T>(message: &'static str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    let output = fut.await;
    pb.finish_and_clear();
    output
}

/// Prints an outcome's message, flagging absorbed warnings.
pub fn print_outcome(outcome: &Outcome) {
    match outcome.classification {
        Classification::BenignWarning => println!("warning: {}", outcome.message.trim_end()),
        Classification::Success | Classification::Failure => {
            println!("{}", outcome.message.trim_end());
        }
    }
}
