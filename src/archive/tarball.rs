// src/archive/tarball.rs
//! Tar family handler: `.tar.gz`, `.tgz`, `.tar.bz2`, `.tar.xz`.

use super::{download_to_file, relocate, Scratch};
use crate::classify::ArchiveFormat;
use crate::config::Options;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::ProgressReporter;
use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use xz2::read::XzDecoder;

/// Downloads a tarball and moves its top-level directory into the working directory.
///
/// The archive is expected to hold exactly one top-level directory. When it
/// holds several, the first one by name wins; when it holds none, extraction
/// fails.
///
/// # Returns
/// The absolute path of the relocated directory.
///
/// # Errors
/// * `Error::DownloadFailed` if the archive cannot be fetched.
/// * `Error::ExtractionFailed` if decoding fails, no directory is found, or the move fails.
/// * `Error::DestinationExists` if the target exists and `options.force` is false.
pub fn fetch_and_extract_tar(
    url: &str,
    format: ArchiveFormat,
    options: &Options,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    let scratch = Scratch::create_in(&options.working_dir)?;
    let archive_path = scratch.archive_path(format.extension_for(url));
    download_to_file(url, &archive_path, progress)?;

    let unpack_dir = scratch.unpack_dir();
    unpack_tar(&archive_path, format, &unpack_dir)?;

    let root = find_root_dir(&unpack_dir)?;
    log::info!("Archive root directory: {}", root.to_string_lossy());

    let dest = options.working_dir.join(&root);
    relocate(&unpack_dir.join(&root), &dest, options.force)?;
    Ok(dest)
}

/// Decodes `archive` with the decompressor matching `format` and unpacks it into `dest`.
fn unpack_tar(archive: &Path, format: ArchiveFormat, dest: &Path) -> Result<()> {
    let file = BufReader::new(File::open(archive).map_err(|e| io_error_with_path(e, archive))?);
    let decoder: Box<dyn Read> = match format {
        ArchiveFormat::TarGz => Box::new(MultiGzDecoder::new(file)),
        ArchiveFormat::TarBz2 => Box::new(BzDecoder::new(file)),
        ArchiveFormat::TarXz => Box::new(XzDecoder::new(file)),
        ArchiveFormat::Zip => {
            return Err(Error::ExtractionFailed(
                "zip archives are not tarballs".to_string(),
            ))
        }
    };

    let mut archive = tar::Archive::new(decoder);
    archive
        .unpack(dest)
        .map_err(|e| Error::ExtractionFailed(format!("tar extraction failed: {}", e)))
}

/// Returns the name of the first subdirectory of `dir`, in name order.
fn find_root_dir(dir: &Path) -> Result<OsString> {
    let entries = fs::read_dir(dir)
        .map_err(|e| Error::ExtractionFailed(format!("failed to read extracted files: {}", e)))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error_with_path(e, dir))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| io_error_with_path(e, entry.path()))?
            .is_dir();
        if is_dir {
            dirs.push(entry.file_name());
        }
    }
    if dirs.len() > 1 {
        log::warn!(
            "Archive has {} top-level directories; using the first by name",
            dirs.len()
        );
    }

    dirs.sort();
    dirs.into_iter()
        .next()
        .ok_or_else(|| Error::ExtractionFailed("no directory found in archive".to_string()))
}
