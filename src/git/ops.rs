// src/git/ops.rs
//! Low-level git operations using `git2`.

use crate::progress::ProgressReporter;
use git2::{Cred, FetchOptions, RemoteCallbacks};
use log::{debug, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// Sets up remote callbacks for authentication and progress reporting.
pub(super) fn create_remote_callbacks(
    progress: Option<Arc<dyn ProgressReporter>>,
) -> RemoteCallbacks<'static> {
    let mut callbacks = RemoteCallbacks::new();

    // Authentication: Try SSH agent first, then the default key path.
    callbacks.credentials(|_url, username_from_url, _allowed_types| {
        let username = username_from_url.unwrap_or("git");
        debug!("Attempting SSH authentication for user: {}", username);

        if let Ok(cred) = Cred::ssh_key_from_agent(username) {
            debug!("Authenticated via SSH agent");
            return Ok(cred);
        }

        if let Some(key_path) = default_ssh_key() {
            if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                debug!("Authenticated via default SSH key path");
                return Ok(cred);
            }
        }

        warn!("SSH authentication failed: No agent or default keys found.");
        Err(git2::Error::from_str(
            "Authentication failed: could not connect with SSH agent or default keys",
        ))
    });

    if let Some(p) = progress {
        callbacks.transfer_progress(move |stats| {
            if stats.received_objects() == stats.total_objects() {
                p.set_length(stats.total_deltas() as u64);
                p.set_position(stats.indexed_deltas() as u64);
                p.set_message("Resolving deltas...".to_string());
            } else if stats.total_objects() > 0 {
                p.set_length(stats.total_objects() as u64);
                p.set_position(stats.received_objects() as u64);
                p.set_message("Receiving objects...".to_string());
            }
            true
        });
    }

    callbacks
}

/// `~/.ssh/id_rsa`, if a home directory can be found.
fn default_ssh_key() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".ssh").join("id_rsa"))
}

pub(super) fn create_fetch_options(
    depth: Option<u32>,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> FetchOptions<'static> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(create_remote_callbacks(progress));
    if let Some(depth) = depth {
        fetch_options.depth(i32::try_from(depth).unwrap_or(i32::MAX));
        debug!("Set shallow clone depth to: {}", depth);
    }

    fetch_options
}
