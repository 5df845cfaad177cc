//! The `take` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `take` library.
//!
//! # Example
//!
//! ```
//! use take::prelude::*;
//! # fn main() -> Result<()> {
//! # let work = tempfile::tempdir().unwrap();
//!
//! let options = OptionsBuilder::new()
//!     .path("scratchpad")
//!     .working_dir(work.path())
//!     .build()?;
//! let outcome = take(&options, None)?;
//! assert_eq!(outcome.action, Action::Created);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::classify::{classify, classify_in, ArchiveFormat, Target};
pub use crate::config::{Options, OptionsBuilder};
pub use crate::core_types::{Action, Outcome};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::shell::Shell;
pub use crate::take;

pub use crate::archive::{fetch_and_extract_tar, fetch_and_extract_zip};
pub use crate::git::{clone_repository, repo_name};
