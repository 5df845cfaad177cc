use super::{normalize_lexically, Options};
use crate::cli::Cli;
use crate::errors::{io_error_with_path, Result};
use std::env;
use std::path::PathBuf;

/// A builder for creating `Options` programmatically.
///
/// # Examples
///
/// ```
/// use take::OptionsBuilder;
///
/// let options = OptionsBuilder::new()
///     .path("https://example.com/project.tar.gz")
///     .force(true)
///     .working_dir("/tmp")
///     .build()
///     .unwrap();
///
/// assert!(options.force);
/// assert_eq!(options.clone_depth, 0);
/// assert_eq!(options.working_dir, std::path::PathBuf::from("/tmp"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    path: Option<String>,
    clone_depth: Option<u32>,
    force: Option<bool>,
    working_dir: Option<PathBuf>,
}

impl OptionsBuilder {
    /// Creates a new `OptionsBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            path: cli.target,
            clone_depth: Some(cli.depth),
            force: Some(cli.force),
            working_dir: None,
        }
    }

    /// Sets the directory, git URL or archive URL to take.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the shallow clone depth. `0` clones the full history.
    pub fn clone_depth(mut self, depth: u32) -> Self {
        self.clone_depth = Some(depth);
        self
    }

    /// Replace an existing destination instead of failing.
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    /// Overrides the working directory (defaults to the process's current directory).
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Builds the `Options`.
    ///
    /// An empty path is accepted here; the dispatcher rejects it with
    /// `Error::InvalidPath` so the failure surfaces from `take` itself.
    ///
    /// # Errors
    /// Returns `Error::Io` if the current directory cannot be determined.
    pub fn build(self) -> Result<Options> {
        let working_dir = match self.working_dir {
            Some(dir) if dir.is_absolute() => normalize_lexically(&dir),
            Some(dir) => normalize_lexically(&current_dir()?.join(dir)),
            None => current_dir()?,
        };
        log::debug!("Working directory: {}", working_dir.display());

        Ok(Options {
            path: self.path.unwrap_or_default(),
            clone_depth: self.clone_depth.unwrap_or(0),
            force: self.force.unwrap_or(false),
            working_dir,
        })
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| io_error_with_path(e, "."))
}
