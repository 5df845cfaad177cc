// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use directories::BaseDirs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Expands a leading `~` to the current user's home directory and lexically
/// normalizes relative results.
///
/// The filesystem is never consulted beyond the home directory lookup.
///
/// # Errors
/// * `Error::InvalidPath` if `path` is empty.
/// * `Error::Io` if the home directory cannot be determined.
///
/// # Examples
/// ```
/// use take::config::expand_path;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_path("a//b/./c").unwrap(), PathBuf::from("a/b/c"));
/// assert!(expand_path("").is_err());
/// ```
pub fn expand_path(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(Error::InvalidPath);
    }

    let expanded = match path.strip_prefix('~') {
        Some(rest) => {
            let rest = rest.trim_start_matches(['/', '\\']);
            home_dir()?.join(rest)
        }
        None => PathBuf::from(path),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(normalize_lexically(&expanded))
    }
}

fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| {
            io_error_with_path(
                io::Error::new(io::ErrorKind::NotFound, "could not determine home directory"),
                "~",
            )
        })
}

/// Collapses `.` segments, redundant separators and resolvable `..` segments
/// without touching the filesystem.
///
/// An empty relative result becomes `.`. Leading `..` segments of a relative
/// path are kept; `..` directly under the root is dropped.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
