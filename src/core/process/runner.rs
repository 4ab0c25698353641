// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! check cwd is a directory ---- no --> ProcessError::InvalidDirectory
//!   |
//!   v
//! build_command()
//! args, cwd, env, stdin=null, (Windows: CREATE_NO_WINDOW)
//!   |
//!   v
//! spawn() ---- NotFound --> ProcessError::ExecutableNotFound
//!   |
//!   v
//! run_child()  stream stdout/stderr
//!   |
//!   v
//! validate exit_code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr, combined }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, ScopeResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(super) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// Once spawned, the process always runs to completion.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - The working directory does not exist or is not a directory.
    /// - The executable cannot be found or spawned.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` is not set);
    ///   the combined output is attached to the error.
    pub async fn run(self) -> ScopeResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            if !cwd.is_dir() {
                return Err(ProcessError::InvalidDirectory {
                    path: cwd.display().to_string(),
                }
                .into());
            }
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProcessError::ExecutableNotFound {
                    name: self.program().display().to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                }
            }
        })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let output = self.run_child(&name, &cmd_line, &mut child).await?;

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
                output: output.combined().to_string(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.environment() {
            command.env(key, value);
        }

        // Never let a child sit waiting on a terminal prompt.
        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));

        #[cfg(windows)]
        super::windows::hide_console(&mut command);

        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}
