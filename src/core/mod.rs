// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!     core
//!      |
//!      v
//!   process
//!      |
//!   Builder  Output
//!   (Windows: CREATE_NO_WINDOW)
//! ```

pub mod process;
