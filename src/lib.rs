//! `take` is a library and command-line tool that turns one argument into a
//! directory you can change into.
//!
//! Given a single input string it either:
//! 1.  **Creates** a local directory chain (like `mkdir -p`, with `~` expansion),
//! 2.  **Clones** a git repository (a git URL or an existing local repository), or
//! 3.  **Downloads** a `.tar.gz`/`.tgz`/`.tar.bz2`/`.tar.xz`/`.zip` archive and
//!     moves its top-level directory into the working directory.
//!
//! The resulting absolute path is returned (and printed by the binary) so a
//! thin shell function can `cd` into it.
//!
//! # Example: Library Usage
//!
//! ```
//! use take::{take, OptionsBuilder};
//! use tempfile::tempdir;
//!
//! let work = tempdir().unwrap();
//! let options = OptionsBuilder::new()
//!     .path("notes/2024")
//!     .working_dir(work.path())
//!     .build()
//!     .unwrap();
//!
//! let outcome = take(&options, None).unwrap();
//! assert!(outcome.was_created());
//! assert!(outcome.final_path.is_absolute());
//! assert!(outcome.final_path.ends_with("notes/2024"));
//! assert!(outcome.final_path.is_dir());
//! ```

use std::fs;
use std::sync::Arc;

pub mod archive;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod destination;
pub mod errors;
pub mod git;
pub mod prelude;
pub mod progress;
pub mod shell;

pub use crate::classify::Target;
pub use crate::config::{Options, OptionsBuilder};
pub use crate::core_types::{Action, Outcome};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::progress::ProgressReporter;

use crate::config::{expand_path, normalize_lexically};
use crate::errors::create_dir_error;
use std::path::PathBuf;

/// Runs one `take` operation: classifies `options.path` and dispatches to the
/// matching handler.
///
/// # Arguments
/// * `options` - The operation input. `working_dir` must be absolute.
/// * `progress` - Optional reporter for clone and download progress.
///
/// # Returns
/// An [`Outcome`] whose `final_path` is an absolute, existing directory.
///
/// # Errors
/// * `Error::InvalidPath` if `options.path` is empty.
/// * `Error::PermissionDenied` or `Error::Io` if a local directory cannot be created.
/// * `Error::InvalidUrl` if the input looks remote but matches no known shape.
/// * `Error::GitCloneFailed`, `Error::DownloadFailed`, `Error::ExtractionFailed`
///   or `Error::DestinationExists` from the clone and archive handlers.
pub fn take(options: &Options, progress: Option<Arc<dyn ProgressReporter>>) -> Result<Outcome> {
    if options.path.is_empty() {
        return Err(Error::InvalidPath);
    }

    let target = classify::classify_in(&options.path, &options.working_dir);
    log::debug!("Classified '{}' as {:?}", options.path, target);

    match target {
        Target::Local => create_local(options).map(|p| Outcome::new(p, Action::Created)),
        Target::Git => git::clone_repository(
            &options.path,
            &options.working_dir,
            options.shallow_depth(),
            options.force,
            progress,
        )
        .map(|p| Outcome::new(p, Action::Cloned)),
        Target::LocalRepository(repo) => {
            let source = normalize_lexically(&repo);
            // Local clones copy the object database whole; depth does not apply.
            if options.shallow_depth().is_some() {
                log::warn!("--depth is ignored when cloning a local repository");
            }
            git::clone_repository(
                &source.to_string_lossy(),
                &options.working_dir,
                None,
                options.force,
                progress,
            )
            .map(|p| Outcome::new(p, Action::Cloned))
        }
        Target::Tarball(format) => {
            archive::fetch_and_extract_tar(&options.path, format, options, progress)
                .map(|p| Outcome::new(p, Action::Downloaded))
        }
        Target::Zip => archive::fetch_and_extract_zip(&options.path, options, progress)
            .map(|p| Outcome::new(p, Action::Downloaded)),
        Target::Invalid => Err(Error::InvalidUrl {
            url: options.path.clone(),
        }),
    }
}

/// Creates the directory chain for a local path and returns its absolute form.
fn create_local(options: &Options) -> Result<PathBuf> {
    let expanded = expand_path(&options.path)?;
    let absolute = if expanded.is_absolute() {
        normalize_lexically(&expanded)
    } else {
        normalize_lexically(&options.working_dir.join(expanded))
    };

    fs::create_dir_all(&absolute).map_err(|e| create_dir_error(e, &absolute))?;
    log::info!("Created directory '{}'", absolute.display());
    Ok(absolute)
}
