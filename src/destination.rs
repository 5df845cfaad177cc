//! Applies the `--force` rule to clone and extraction destinations.
//!
//! Without force an existing destination is never modified. With force it is
//! removed right before the new content takes its place.

use crate::errors::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Removes whatever exists at `path` (directory, file or symlink).
///
/// Returns `Ok(false)` if nothing was there.
pub fn remove_existing(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Makes `dest` available for an archive root.
///
/// # Errors
/// * `Error::DestinationExists` if `dest` exists and `force` is false.
/// * `Error::ExtractionFailed` if the existing destination cannot be removed.
pub fn claim_for_extraction(dest: &Path, force: bool) -> Result<()> {
    if fs::symlink_metadata(dest).is_err() {
        return Ok(());
    }
    if !force {
        return Err(Error::DestinationExists {
            path: dest.display().to_string(),
        });
    }
    log::info!("Replacing existing '{}'", dest.display());
    remove_existing(dest).map_err(|e| {
        Error::ExtractionFailed(format!(
            "could not remove existing '{}': {}",
            dest.display(),
            e
        ))
    })?;
    Ok(())
}
