// src/archive/zipball.rs
//! Zip handler: extracted in-process with the `zip` crate.

use super::{download_to_file, relocate, Scratch};
use crate::classify::ArchiveFormat;
use crate::config::Options;
use crate::constants::FALLBACK_ARCHIVE_NAME;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::ProgressReporter;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use url::Url;
use zip::ZipArchive;

/// Downloads a zip archive and moves its root directory into the working directory.
///
/// The root is the single top-level directory shared by every entry (entries
/// under `.`- or `_`-prefixed top-level names, such as `__MACOSX/`, are
/// ignored when deciding). If there is no such directory, every entry is
/// extracted beneath a directory named after the archive file instead.
///
/// # Returns
/// The absolute path of the relocated directory.
///
/// # Errors
/// * `Error::DownloadFailed` if the archive cannot be fetched.
/// * `Error::ExtractionFailed` on a malformed archive or a failed move.
/// * `Error::DestinationExists` if the target exists and `options.force` is false.
pub fn fetch_and_extract_zip(
    url: &str,
    options: &Options,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    let scratch = Scratch::create_in(&options.working_dir)?;
    let archive_path = scratch.archive_path(ArchiveFormat::Zip.extension_for(url));
    download_to_file(url, &archive_path, progress)?;

    let file = File::open(&archive_path).map_err(|e| io_error_with_path(e, &archive_path))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::ExtractionFailed(format!("failed to open zip: {}", e)))?;

    let unpack_dir = scratch.unpack_dir();
    let names = entry_names(&mut archive)?;
    let (extract_base, root) = match common_root(names.iter().map(String::as_str)) {
        Some(root) => (unpack_dir.clone(), root),
        None => {
            let name = archive_name(url);
            log::info!(
                "Zip has no single root directory; extracting into '{}'",
                name
            );
            (unpack_dir.join(&name), name)
        }
    };
    log::info!("Archive root directory: {}", root);

    unpack_zip(&mut archive, &extract_base)?;

    let root_path = unpack_dir.join(&root);
    if !root_path.is_dir() {
        return Err(Error::ExtractionFailed(format!(
            "root directory '{}' missing after extraction",
            root
        )));
    }

    let dest = options.working_dir.join(&root);
    relocate(&root_path, &dest, options.force)?;
    Ok(dest)
}

/// Determines the top-level directory shared by all entries of a zip archive.
///
/// `names` are `/`-separated, with a trailing `/` marking directories (see
/// [`entry_names`]). Entries whose first path segment starts with `.` or `_`
/// are skipped. A
/// top-level file, or two different top-level names, mean there is no common
/// root.
///
/// # Examples
/// ```
/// use take::archive::common_root;
///
/// assert_eq!(
///     common_root(["proj/", "proj/a.txt", "__MACOSX/proj/._a.txt"]),
///     Some("proj".to_string())
/// );
/// assert_eq!(common_root(["a/x.txt", "b/y.txt"]), None);
/// assert_eq!(common_root(["README.md"]), None);
/// ```
pub fn common_root<'a, I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut root: Option<&str> = None;

    for name in names {
        let (first, rest) = match name.split_once('/') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        if first.is_empty() || first.starts_with('.') || first.starts_with('_') {
            continue;
        }
        // `name` without a separator is a file sitting at the top level.
        if rest.is_none() {
            return None;
        }
        match root {
            None => root = Some(first),
            Some(existing) if existing != first => return None,
            Some(_) => {}
        }
    }

    root.map(str::to_string)
}

/// The names of all safely extractable entries, as [`unpack_zip`] will lay them out.
///
/// Each name is rebuilt from the path `enclosed_name` yields, so root detection
/// and extraction agree on what a separator is.
fn entry_names<R: io::Read + io::Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| Error::ExtractionFailed(format!("failed to read zip entry: {}", e)))?;
        let Some(path) = entry.enclosed_name() else {
            continue;
        };
        let mut name = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        if name.is_empty() {
            continue;
        }
        if entry.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    Ok(names)
}

/// Name for the synthesized root: the archive's file name without `.zip`.
fn archive_name(url: &str) -> String {
    let file_name = Url::parse(url)
        .ok()
        .and_then(|u| u.path_segments().and_then(|s| s.last().map(str::to_string)))
        .unwrap_or_else(|| url.rsplit('/').next().unwrap_or_default().to_string());
    let stem = file_name.strip_suffix(".zip").unwrap_or(&file_name);

    if stem.is_empty() || stem.starts_with('.') {
        FALLBACK_ARCHIVE_NAME.to_string()
    } else {
        stem.to_string()
    }
}

/// Materializes every entry of `archive` beneath `dest`.
fn unpack_zip<R: io::Read + io::Seek>(archive: &mut ZipArchive<R>, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| io_error_with_path(e, dest))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::ExtractionFailed(format!("failed to read zip entry: {}", e)))?;
        let Some(relative) = entry.enclosed_name() else {
            log::warn!("Skipping zip entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| {
                Error::ExtractionFailed(format!("failed to create directory: {}", e))
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ExtractionFailed(format!("failed to create parent directory: {}", e))
            })?;
        }
        let mut out_file = File::create(&out_path)
            .map_err(|e| Error::ExtractionFailed(format!("failed to create file: {}", e)))?;
        io::copy(&mut entry, &mut out_file).map_err(|e| {
            Error::ExtractionFailed(format!("failed to extract '{}': {}", entry.name(), e))
        })?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o7777)).map_err(
                |e| Error::ExtractionFailed(format!("failed to set file mode: {}", e)),
            )?;
        }
    }
    Ok(())
}
