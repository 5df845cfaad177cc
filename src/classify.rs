//! Decides, from the shape of the input string alone, what `take` should do with it.
//!
//! Classification is pattern based: no network probing and no content sniffing.
//! The only filesystem access is the check for an existing local git repository
//! in [`classify_in`].

use crate::constants::{DEFAULT_TAR_EXTENSION, DEFAULT_ZIP_EXTENSION};
use crate::git::is_git_repo;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Git URLs: `user@host:...`, or an http(s)/git/ssh/ftp(s)/rsync scheme, ending in `.git`.
static GIT_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9]+@|https?|git|ssh|ftps?|rsync).*\.git/?$").unwrap());

/// Tarball URLs over http(s)/ftp.
static TARBALL_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?|ftp).*\.(tar\.(gz|bz2|xz)|tgz)$").unwrap());

/// Zip URLs over http(s)/ftp.
static ZIP_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(https?|ftp).*\.zip$").unwrap());

/// Archive formats `take` knows how to unpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// `.tar.gz` or `.tgz`
    TarGz,
    /// `.tar.bz2`
    TarBz2,
    /// `.tar.xz`
    TarXz,
    /// `.zip`
    Zip,
}

impl ArchiveFormat {
    /// Recognises an archive format from a URL or file name suffix.
    ///
    /// # Examples
    /// ```
    /// use take::classify::ArchiveFormat;
    ///
    /// assert_eq!(ArchiveFormat::from_suffix("https://host/x.tgz"), Some(ArchiveFormat::TarGz));
    /// assert_eq!(ArchiveFormat::from_suffix("https://host/x.tar.xz"), Some(ArchiveFormat::TarXz));
    /// assert_eq!(ArchiveFormat::from_suffix("https://host/x.rar"), None);
    /// ```
    pub fn from_suffix(name: &str) -> Option<Self> {
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".tar.bz2") {
            Some(Self::TarBz2)
        } else if name.ends_with(".tar.xz") {
            Some(Self::TarXz)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }

    /// The file extension to give the downloaded archive, preserving the URL's suffix.
    pub fn extension_for(self, url: &str) -> &'static str {
        match self {
            Self::TarGz if url.ends_with(".tgz") => ".tgz",
            Self::TarGz => DEFAULT_TAR_EXTENSION,
            Self::TarBz2 => ".tar.bz2",
            Self::TarXz => ".tar.xz",
            Self::Zip => DEFAULT_ZIP_EXTENSION,
        }
    }

    pub fn is_tar(self) -> bool {
        !matches!(self, Self::Zip)
    }
}

/// The result of classifying an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A local directory to create.
    Local,
    /// A git URL to clone.
    Git,
    /// An existing local git repository to clone, resolved against the working directory.
    LocalRepository(PathBuf),
    /// A tarball URL in the given format.
    Tarball(ArchiveFormat),
    /// A zip archive URL.
    Zip,
    /// Looks like a URL or SSH reference, but matches no known pattern.
    Invalid,
}

/// Returns `true` when the input carries a scheme separator or an `@`.
pub fn looks_like_remote(input: &str) -> bool {
    input.contains("://") || input.contains('@')
}

/// Classifies an input by its shape alone.
///
/// # Examples
/// ```
/// use take::classify::{classify, ArchiveFormat, Target};
///
/// assert_eq!(classify("projects/new"), Target::Local);
/// assert_eq!(classify("git@github.com:owner/repo.git"), Target::Git);
/// assert_eq!(classify("https://host/x.tar.gz"), Target::Tarball(ArchiveFormat::TarGz));
/// assert_eq!(classify("https://host/x.zip"), Target::Zip);
/// assert_eq!(classify("https://host/x.xyz"), Target::Invalid);
/// ```
pub fn classify(input: &str) -> Target {
    // Suffix patterns are only consulted for URL-shaped input, so a local
    // path such as `gitwork/notes.git` stays a directory.
    if !looks_like_remote(input) {
        return Target::Local;
    }
    if GIT_URL_RE.is_match(input) {
        return Target::Git;
    }
    if TARBALL_URL_RE.is_match(input) {
        if let Some(format) = ArchiveFormat::from_suffix(input).filter(|f| f.is_tar()) {
            return Target::Tarball(format);
        }
    }
    if ZIP_URL_RE.is_match(input) {
        return Target::Zip;
    }
    Target::Invalid
}

/// Classifies an input, first checking whether it names an existing local git repository.
///
/// Relative inputs are resolved against `working_dir` for the repository check only.
pub fn classify_in(input: &str, working_dir: &Path) -> Target {
    let candidate = working_dir.join(input);
    if is_git_repo(&candidate) {
        return Target::LocalRepository(candidate);
    }
    classify(input)
}
