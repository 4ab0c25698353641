// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `script` and `watch`.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `script`.
#[derive(Debug, Clone, Default, Args)]
pub struct ScriptArgs {
    /// Script to run, one command per line (stdin when omitted).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Creates the repository directory first if it does not exist.
    #[arg(long)]
    pub create: bool,

    /// Prints the per-line report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `watch`.
#[derive(Debug, Clone, Default, Args)]
pub struct WatchArgs {
    /// Poll interval in milliseconds, overrides watcher.interval_ms.
    #[arg(long = "interval-ms", value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: Option<u64>,
}
