// src/git/mod.rs
//! Handles cloning git repositories provided as input.
//!
//! This module provides functionality to:
//! - Derive the target directory name from a git URL.
//! - Detect existing local repositories by their metadata directory.
//! - Clone remote or local repositories with `git2`, optionally shallow.
//! - Provide authentication callbacks for SSH.

#[cfg(feature = "git")]
mod clone;
#[cfg(feature = "git")]
mod ops;
mod url;

#[cfg(feature = "git")]
pub use clone::clone_repository;
#[cfg(not(feature = "git"))]
pub use disabled::clone_repository;
pub use url::{is_git_repo, repo_name};

#[cfg(not(feature = "git"))]
mod disabled {
    use crate::errors::{Error, Result};
    use crate::progress::ProgressReporter;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Always fails: this build was compiled without the `git` feature.
    pub fn clone_repository(
        url: &str,
        _working_dir: &Path,
        _depth: Option<u32>,
        _force: bool,
        _progress: Option<Arc<dyn ProgressReporter>>,
    ) -> Result<PathBuf> {
        Err(Error::GitCloneFailed {
            url: url.to_string(),
            output: "take was built without git support (enable the `git` feature)".to_string(),
        })
    }
}
