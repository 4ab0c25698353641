// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working tree summary from `git status --porcelain`.
//!
//! ```text
//! XY path
//! |`-- worktree column: M/D/T/... --> unstaged
//! `--- index column:    M/A/D/R/C --> staged
//! ?? path                         --> untracked
//! ```

use serde::Serialize;

use crate::error::{RepoError, ScopeResult};

/// Which kinds of change are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkingTreeState {
    pub staged: bool,
    pub unstaged: bool,
    pub untracked: bool,
}

impl WorkingTreeState {
    /// Parses porcelain v1 output. Lines must not be trimmed, the leading
    /// column is significant.
    #[must_use]
    pub fn parse(porcelain: &str) -> Self {
        let mut state = Self::default();
        for line in porcelain.lines() {
            let mut columns = line.chars();
            let (Some(index), Some(worktree)) = (columns.next(), columns.next()) else {
                continue;
            };
            if index == '?' && worktree == '?' {
                state.untracked = true;
                continue;
            }
            if index == '!' {
                continue;
            }
            if index != ' ' {
                state.staged = true;
            }
            if worktree != ' ' {
                state.unstaged = true;
            }
        }
        state
    }

    /// Returns true if nothing is staged, modified, or untracked.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.staged && !self.unstaged && !self.untracked
    }

    /// Checks that the tree is in a state where pushing makes sense.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::StageRequired` when only unstaged changes exist and
    /// `RepoError::CommitRequired` when staged changes are not committed.
    pub fn ensure_push_ready(&self) -> ScopeResult<()> {
        if self.staged {
            return Err(RepoError::CommitRequired.into());
        }
        if self.unstaged || self.untracked {
            return Err(RepoError::StageRequired.into());
        }
        Ok(())
    }
}
