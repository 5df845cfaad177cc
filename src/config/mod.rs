//! Defines the `Options` struct that drives a single `take` invocation.
//!
//! Options are built once (from the CLI or programmatically via
//! [`OptionsBuilder`]) and are immutable for the rest of the run.

use std::path::PathBuf;

pub use builder::OptionsBuilder;
mod builder;
pub mod path_resolve;

pub use path_resolve::{expand_path, normalize_lexically};

/// Input to one `take` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory to create, git URL to clone, or archive URL to download.
    pub path: String,
    /// Shallow clone depth. `0` clones the full history.
    pub clone_depth: u32,
    /// Replace an existing clone or extraction destination.
    pub force: bool,
    /// Absolute directory that relative paths, clones and extracted archives land in.
    pub working_dir: PathBuf,
}

impl Options {
    /// Returns the clone depth as libgit2 expects it: `None` for a full clone.
    pub fn shallow_depth(&self) -> Option<u32> {
        (self.clone_depth > 0).then_some(self.clone_depth)
    }

    /// Creates `Options` for `path` rooted at `working_dir`, with defaults for everything else.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test(path: &str, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.to_string(),
            clone_depth: 0,
            force: false,
            working_dir: working_dir.into(),
        }
    }
}
