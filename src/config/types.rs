// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config
//!   [global]      log levels, log file
//!   [git]         executable, remote
//!   [watcher]     interval_ms
//!   [repository]  path
//!   [script]      benign_patterns
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::git::remote_spec::ORIGIN;
use crate::logging::LogLevel;
use crate::watch::DEFAULT_POLL_INTERVAL;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log when unset.
    pub log_file: Option<PathBuf>,
    /// Write the file log as JSON lines.
    pub json_log: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            json_log: false,
        }
    }
}

/// How git is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program name or path of the git executable.
    pub executable: PathBuf,
    /// Remote used by push, pull and branch creation.
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("git"),
            remote: ORIGIN.to_string(),
        }
    }
}

/// Branch watcher options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatcherConfig {
    /// Milliseconds between branch polls.
    pub interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval_ms: u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(3_000),
        }
    }
}

impl WatcherConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                section: "watcher".to_string(),
                key: "interval_ms".to_string(),
                message: "interval must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Repository selected when `--repo` is not given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    pub path: Option<PathBuf>,
}

/// Batch script options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Output substrings treated as benign on top of the built-in list.
    pub benign_patterns: Vec<String>,
}
