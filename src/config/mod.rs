// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitscope.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitscope.toml (cwd, optional)
//! 3. --config FILE
//! 4. GITSCOPE_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITSCOPE_GIT__REMOTE=upstream            → git.remote = "upstream"
//! GITSCOPE_WATCHER__INTERVAL_MS=500        → watcher.interval_ms = 500
//! GITSCOPE_SCRIPT__BENIGN_PATTERNS=a,b     → script.benign_patterns = ["a", "b"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, RepositoryConfig, ScriptConfig, WatcherConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gitscope.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GITSCOPE";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub git: GitConfig,
    pub watcher: WatcherConfig,
    pub repository: RepositoryConfig,
    pub script: ScriptConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitscope::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitscope.toml")
    ///     .with_env_prefix("GITSCOPE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty remote name or a zero
    /// watcher interval.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.git.remote.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "remote".to_string(),
                message: "remote name cannot be empty".to_string(),
            });
        }
        self.watcher.validate()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt(&self.global.log_file));
        options.insert("global.json_log", self.global.json_log.to_string());
        options.insert("git.executable", self.git.executable.display().to_string());
        options.insert("git.remote", self.git.remote.clone());
        options.insert("watcher.interval_ms", self.watcher.interval_ms.to_string());
        options.insert("repository.path", fmt(&self.repository.path));
        options.insert(
            "script.benign_patterns",
            self.script.benign_patterns.join(", "),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
