//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes every failure a
//! single `take` invocation can report, and the fieldless `ErrorKind` used by
//! callers that only care about the category.

use std::io;
use std::path::Path;
use thiserror::Error;

/// A specialized `Result` type for `take` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::take`] and the handlers it dispatches to.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path was empty or otherwise unusable.
    #[error("invalid path specified")]
    InvalidPath,

    /// The operating system refused to create a directory.
    #[error("permission denied creating '{path}'")]
    PermissionDenied {
        /// The directory that could not be created.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    /// The input looks like a URL or SSH reference but is not a git, tarball or zip URL.
    #[error("invalid URL format: '{url}' is not a git repository, tarball or zip URL")]
    InvalidUrl {
        /// The rejected input.
        url: String,
    },

    /// Cloning the repository failed.
    #[error("git clone failed for '{url}': {output}")]
    GitCloneFailed {
        /// The repository that was being cloned.
        url: String,
        /// Diagnostic output from the clone.
        output: String,
    },

    /// The archive could not be fetched (transport error or non-success status).
    #[error("failed to download '{url}': {reason}")]
    DownloadFailed {
        /// The archive URL.
        url: String,
        /// Why the download failed.
        reason: String,
    },

    /// The archive could not be unpacked or its root could not be moved into place.
    #[error("failed to extract archive: {0}")]
    ExtractionFailed(String),

    /// The destination already exists and `--force` was not given.
    #[error("destination '{path}' already exists (use --force to replace it)")]
    DestinationExists {
        /// The existing destination.
        path: String,
    },

    /// Any other I/O failure, with the path that caused it.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },
}

/// The category of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPath,
    PermissionDenied,
    InvalidUrl,
    GitCloneFailed,
    DownloadFailed,
    ExtractionFailed,
    DestinationExists,
    Io,
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPath => ErrorKind::InvalidPath,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Error::GitCloneFailed { .. } => ErrorKind::GitCloneFailed,
            Error::DownloadFailed { .. } => ErrorKind::DownloadFailed,
            Error::ExtractionFailed(_) => ErrorKind::ExtractionFailed,
            Error::DestinationExists { .. } => ErrorKind::DestinationExists,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Maps a directory-creation failure, keeping `PermissionDenied` distinct from other I/O errors.
pub fn create_dir_error<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    if source.kind() == io::ErrorKind::PermissionDenied {
        Error::PermissionDenied {
            path: path.as_ref().display().to_string(),
            source,
        }
    } else {
        io_error_with_path(source, path)
    }
}
