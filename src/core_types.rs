// src/core_types.rs

use std::path::PathBuf;

/// What `take` did to produce its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A local directory chain was created (or already existed).
    Created,
    /// A git repository was cloned.
    Cloned,
    /// An archive was downloaded and extracted.
    Downloaded,
}

/// The successful result of a single `take` invocation.
///
/// `final_path` is always absolute and names an existing directory. Because the
/// action is a single enum value, at most one of the `was_*` flags is ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Absolute path of the directory the caller should change into.
    pub final_path: PathBuf,
    /// How the directory came to be.
    pub action: Action,
}

impl Outcome {
    pub(crate) fn new(final_path: PathBuf, action: Action) -> Self {
        Self { final_path, action }
    }

    pub fn was_created(&self) -> bool {
        self.action == Action::Created
    }

    pub fn was_cloned(&self) -> bool {
        self.action == Action::Cloned
    }

    pub fn was_downloaded(&self) -> bool {
        self.action == Action::Downloaded
    }
}
