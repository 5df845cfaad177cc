// src/constants.rs

/// Prefix of the hidden scratch directory created inside the working directory.
pub const SCRATCH_DIR_PREFIX: &str = ".take-";

/// Name of the extraction directory inside the scratch directory.
pub const UNPACK_DIR_NAME: &str = "unpacked";

/// Stem of the downloaded archive file inside the scratch directory.
pub const ARCHIVE_FILE_STEM: &str = "archive";

/// Extension used for tarballs whose URL suffix is not recognised.
pub const DEFAULT_TAR_EXTENSION: &str = ".tar.gz";

/// Extension used for zip archives.
pub const DEFAULT_ZIP_EXTENSION: &str = ".zip";

/// Directory name used when a zip archive's name cannot be derived from its URL.
pub const FALLBACK_ARCHIVE_NAME: &str = "archive";

/// Name of the repository metadata directory that marks a local git repository.
pub const GIT_METADATA_DIR: &str = ".git";

/// Seconds to wait for an HTTP connection before giving up.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with archive downloads.
pub const USER_AGENT: &str = concat!("take/", env!("CARGO_PKG_VERSION"));
