// src/archive/mod.rs
//! Downloads archives and unpacks them into the working directory.
//!
//! Both handlers share the same skeleton:
//! 1. Create a private scratch directory (removed on every exit path).
//! 2. Stream the archive into `scratch/archive<ext>`.
//! 3. Unpack into `scratch/unpacked` and pick the archive's root directory.
//! 4. Move that root into the working directory, honouring `--force`.
//!
//! The scratch directory lives inside the working directory so the final
//! move is a same-filesystem rename.

mod download;
mod tarball;
mod zipball;

pub use download::download_to_file;
pub use tarball::fetch_and_extract_tar;
pub use zipball::{common_root, fetch_and_extract_zip};

use crate::constants::{ARCHIVE_FILE_STEM, SCRATCH_DIR_PREFIX, UNPACK_DIR_NAME};
use crate::destination::claim_for_extraction;
use crate::errors::{create_dir_error, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempDirBuilder, TempDir};

/// An exclusively-owned staging directory, deleted when dropped.
pub(crate) struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// Creates a hidden scratch directory inside `working_dir`.
    pub(crate) fn create_in(working_dir: &Path) -> Result<Self> {
        let dir = TempDirBuilder::new()
            .prefix(SCRATCH_DIR_PREFIX)
            .tempdir_in(working_dir)
            .map_err(|e| create_dir_error(e, working_dir))?;
        log::debug!("Created scratch directory '{}'", dir.path().display());
        Ok(Self { dir })
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the downloaded archive is written, keeping its extension.
    pub(crate) fn archive_path(&self, extension: &str) -> PathBuf {
        self.path().join(format!("{}{}", ARCHIVE_FILE_STEM, extension))
    }

    /// Where the archive is unpacked, separate from the downloaded file.
    pub(crate) fn unpack_dir(&self) -> PathBuf {
        self.path().join(UNPACK_DIR_NAME)
    }
}

/// Moves an extracted root directory to `dest`.
///
/// # Errors
/// * `Error::DestinationExists` if `dest` exists and `force` is false.
/// * `Error::ExtractionFailed` if the move (or the forced removal) fails.
pub(crate) fn relocate(src: &Path, dest: &Path, force: bool) -> Result<()> {
    claim_for_extraction(dest, force)?;
    fs::rename(src, dest).map_err(|e| {
        Error::ExtractionFailed(format!(
            "failed to move '{}' to '{}': {}",
            src.display(),
            dest.display(),
            e
        ))
    })?;
    log::debug!("Moved '{}' to '{}'", src.display(), dest.display());
    Ok(())
}
