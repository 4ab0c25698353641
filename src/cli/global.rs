// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --repo DIR        ← repository to operate on (beats repository.path)
//! --config FILE     ← additional config file
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity (falls back to --log-level)
//! --log-file FILE   ← enables the file log
//!
//! Precedence: CLI flags > GITSCOPE_* env > --config > gitscope.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Repository directory. Defaults to repository.path, then the current directory.
    #[arg(short = 'C', long = "repo", value_name = "DIR", global = true)]
    pub repo: Option<PathBuf>,

    /// Path to an additional TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies the command-line flags as configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be set.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        if let Some(ref repo) = self.repo {
            loader = loader.set("repository.path", repo.display().to_string())?;
        }

        Ok(loader)
    }
}
