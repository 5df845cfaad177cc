// src/git/clone.rs
//! Clones git repositories into the working directory using `git2`.

use super::ops::create_fetch_options;
use super::url::repo_name;
use crate::archive::Scratch;
use crate::destination::remove_existing;
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use git2::build::RepoBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Clones `url` into `working_dir/<repo name>`.
///
/// The target name is derived with [`repo_name`]. A name collision is not
/// resolved automatically: without `force` the clone reports it (libgit2
/// refuses to clone into a non-empty directory). With `force` the repository
/// is cloned into a scratch directory first and the existing destination is
/// only replaced once that clone has succeeded.
///
/// # Arguments
/// * `url` - Remote URL, SSH reference, or path to a local repository.
/// * `working_dir` - Absolute directory the clone is created in.
/// * `depth` - Shallow clone depth; `None` clones the full history.
/// * `force` - Replace an existing destination after a successful clone.
/// * `progress` - An optional progress reporter for the transfer.
///
/// # Returns
/// The absolute path of the cloned working tree.
///
/// # Errors
/// Returns `Error::GitCloneFailed` carrying libgit2's message if the clone (or
/// replacing the existing destination) fails. A failed forced clone leaves the
/// existing destination untouched.
pub fn clone_repository(
    url: &str,
    working_dir: &Path,
    depth: Option<u32>,
    force: bool,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    let name = repo_name(url);
    let target = working_dir.join(&name);

    if !force {
        clone_into(url, &target, depth, progress)?;
        return Ok(target);
    }

    let scratch = Scratch::create_in(working_dir)?;
    let staged = scratch.path().join(&name);
    clone_into(url, &staged, depth, progress)?;

    let failed = |output: String| Error::GitCloneFailed {
        url: url.to_string(),
        output,
    };
    let removed = remove_existing(&target).map_err(|e| {
        failed(format!(
            "could not remove existing '{}': {}",
            target.display(),
            e
        ))
    })?;
    if removed {
        log::info!("Replaced existing '{}'", target.display());
    }
    fs::rename(&staged, &target).map_err(|e| {
        failed(format!(
            "could not move clone into '{}': {}",
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

fn clone_into(
    url: &str,
    dest: &Path,
    depth: Option<u32>,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<()> {
    log::info!(
        "Cloning git repository from '{}' into '{}'...",
        url,
        dest.display()
    );

    let mut repo_builder = RepoBuilder::new();
    repo_builder.fetch_options(create_fetch_options(depth, progress.clone()));
    repo_builder
        .clone(url, dest)
        .map_err(|e| Error::GitCloneFailed {
            url: url.to_string(),
            output: e.message().to_string(),
        })?;

    if let Some(p) = &progress {
        p.finish_with_message("Clone complete.".to_string());
    }
    log::info!("Successfully cloned repository.");
    Ok(())
}
