// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows-specific process utilities.
//!
//! ```text
//! hide_console(cmd) --> CREATE_NO_WINDOW
//! ```

use tokio::process::Command;

/// Keeps console children (git.exe, cmd.exe) from flashing a window when the
/// host is a desktop application.
pub(super) fn hide_console(command: &mut Command) {
    use windows::Win32::System::Threading::CREATE_NO_WINDOW;

    command.creation_flags(CREATE_NO_WINDOW.0);
}
