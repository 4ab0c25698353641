// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsed `git branch --list` output.
//!
//! ```text
//!   feature-x        --> "feature-x"
//! * main             --> "main"   (current)
//! + linked-worktree  --> "linked-worktree"
//! ```

use serde::Serialize;

/// Ordered local branch names with the checked-out branch marked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchList {
    names: Vec<String>,
    current: Option<usize>,
}

impl BranchList {
    /// Parses the output of `git branch --list`.
    #[must_use]
    pub fn parse(output: &str) -> Self {
        let mut names = Vec::new();
        let mut current = None;
        for line in output.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            if let Some(name) = line.strip_prefix("* ") {
                current = Some(names.len());
                names.push(name.trim().to_string());
            } else if let Some(name) = line.strip_prefix("+ ") {
                names.push(name.trim().to_string());
            } else {
                names.push(line.trim().to_string());
            }
        }
        Self { names, current }
    }

    /// Builds a list from names, with no current branch.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the checked-out branch, if git marked one.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    /// Returns the first branch, the default selection for pickers.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Order-sensitive comparison of the names only.
    ///
    /// A change of checked-out branch alone does not count.
    #[must_use]
    pub fn same_names(&self, other: &Self) -> bool {
        self.names == other.names
    }
}
