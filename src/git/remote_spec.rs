// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote parsing: pasted `remote add` text and `git remote -v` rows.
//!
//! ```text
//! "git remote add origin https://host/r.git"
//!   strip "git remote add " | "remote add " | "add "
//!   split whitespace, need >= 2 tokens
//!   --> RemoteSpec { name: "origin", url: "https://host/r.git" }
//!
//! "origin  https://host/r.git (fetch)"
//!   --> Remote { name, url, direction: Fetch }
//! ```

use serde::Serialize;

use crate::error::{RepoError, ScopeResult};

/// Prefixes a user may paste in front of the name and URL.
const COMMAND_PREFIXES: &[&str] = &["git remote add ", "remote add ", "add "];

/// Remote that is replaced instead of added alongside.
pub const ORIGIN: &str = "origin";

/// A remote name and URL to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteSpec {
    pub name: String,
    pub url: String,
}

impl RemoteSpec {
    /// Parses free-form text such as `git remote add origin <url>`.
    ///
    /// Tokens past the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::MalformedRemoteSpec` when fewer than two tokens
    /// remain after the prefix is removed.
    pub fn parse(input: &str) -> ScopeResult<Self> {
        let trimmed = input.trim();
        let rest = COMMAND_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed);

        let mut tokens = rest.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(name), Some(url)) => Ok(Self {
                name: name.to_string(),
                url: url.to_string(),
            }),
            _ => Err(RepoError::MalformedRemoteSpec {
                input: input.to_string(),
            }
            .into()),
        }
    }

    /// Returns true if adding this remote must replace an existing one.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.name == ORIGIN
    }
}

/// Which operation a remote URL is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Fetch,
    Push,
}

impl Direction {
    /// The marker git prints after the URL, without parentheses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Push => "push",
        }
    }
}

/// One row of `git remote -v`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: String,
    pub url: String,
    pub direction: Direction,
}

impl Remote {
    /// Parses every well-formed row of `git remote -v`, skipping the rest.
    #[must_use]
    pub fn parse_list(output: &str) -> Vec<Self> {
        output.lines().filter_map(Self::parse_row).collect()
    }

    fn parse_row(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        let url = tokens.next()?;
        let direction = match tokens.next()? {
            "(fetch)" => Direction::Fetch,
            "(push)" => Direction::Push,
            _ => return None,
        };
        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
            direction,
        })
    }
}
