// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .capture_output()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!           Windows: CREATE_NO_WINDOW
//!       --> ProcessOutput { exit_code, stdout, stderr, combined }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
#[cfg(windows)]
mod windows;
