// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository handles and the process-wide active selection.
//!
//! ```text
//! RepositoryHandle::open(path)   must exist, must be a directory
//! RepositoryHandle::create(path) mkdir -p, then open
//!
//! ActiveRepository
//!   RwLock<Option<RepositoryHandle>>
//!   set() / clear()      writers
//!   snapshot()           clone out, never hold the lock across git calls
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::{FsError, RepoError, ScopeResult};

/// Name of the directory that marks a git repository.
pub const REPOSITORY_MARKER: &str = ".git";

/// File name of the ignore-rules file at the repository root.
pub const IGNORE_FILE: &str = ".gitignore";

/// An absolute path identifying a repository directory.
///
/// The directory existed when the handle was built. Whether it holds a
/// repository is checked per operation, since `init` and `clone` run in
/// directories that do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryHandle {
    path: PathBuf,
}

impl RepositoryHandle {
    /// Validates an existing directory and makes its path absolute.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` if the path does not exist or is
    /// not a directory.
    pub fn open(path: impl AsRef<Path>) -> ScopeResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RepoError::InvalidDirectory {
                path: path.display().to_string(),
            }
            .into());
        }
        let path = std::path::absolute(path).map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { path })
    }

    /// Creates the directory (and parents) if needed, then opens it.
    ///
    /// # Errors
    ///
    /// Returns `FsError::IoError` if the directory cannot be created.
    pub fn create(path: impl AsRef<Path>) -> ScopeResult<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::open(path)
    }

    /// Returns the repository directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the directory contains the `.git` marker.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.path.join(REPOSITORY_MARKER).is_dir()
    }

    /// Returns the path of the ignore-rules file.
    #[must_use]
    pub fn ignore_file(&self) -> PathBuf {
        self.path.join(IGNORE_FILE)
    }

    /// Re-checks that the directory still exists.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` if it was removed since the
    /// handle was built.
    pub fn ensure_directory(&self) -> ScopeResult<()> {
        if self.path.is_dir() {
            Ok(())
        } else {
            Err(RepoError::InvalidDirectory {
                path: self.path.display().to_string(),
            }
            .into())
        }
    }

    /// Checks the directory exists and holds a repository.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidDirectory` or `RepoError::InvalidRepository`.
    pub fn ensure_repository(&self) -> ScopeResult<()> {
        self.ensure_directory()?;
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepoError::InvalidRepository {
                path: self.path.display().to_string(),
            }
            .into())
        }
    }
}

impl fmt::Display for RepositoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for RepositoryHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// The currently selected repository, shared between tasks.
///
/// Readers take a [`snapshot`](Self::snapshot) at task start; reassigning the
/// selection afterwards does not affect tasks already running.
#[derive(Debug, Default)]
pub struct ActiveRepository {
    current: RwLock<Option<RepositoryHandle>>,
}

impl ActiveRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Replaces the selection, returning the previous one.
    pub fn set(&self, handle: RepositoryHandle) -> Option<RepositoryHandle> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(handle)
    }

    /// Clears the selection.
    pub fn clear(&self) -> Option<RepositoryHandle> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.take()
    }

    /// Returns true if a repository is selected.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Clones the current selection out of the lock.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::NoRepositorySelected` if nothing is selected.
    pub fn snapshot(&self) -> ScopeResult<RepositoryHandle> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| RepoError::NoRepositorySelected.into())
    }
}
