// src/archive/download.rs
//! Streams an archive over HTTP into a local file.

use crate::constants::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::{ProgressRead, ProgressReporter};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Downloads `url` into `dest`, returning the number of bytes written.
///
/// The body is streamed to disk, never buffered whole in memory. There is no
/// retry: the first failure is returned.
///
/// # Errors
/// * `Error::DownloadFailed` on transport errors, unsupported schemes, a
///   non-success status, or an interrupted body.
/// * `Error::Io` if `dest` cannot be created or written.
pub fn download_to_file(
    url: &str,
    dest: &Path,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<u64> {
    let failed = |reason: String| Error::DownloadFailed {
        url: url.to_string(),
        reason,
    };

    let client = build_client().map_err(|e| failed(e.to_string()))?;
    log::info!("Downloading '{}'...", url);
    let response = client
        .get(url)
        .send()
        .map_err(|e| failed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(failed(format!("server responded with {}", status)));
    }

    if let Some(p) = &progress {
        if let Some(len) = response.content_length() {
            p.set_length(len);
        }
        p.set_message("Downloading...".to_string());
    }

    let file = File::create(dest).map_err(|e| io_error_with_path(e, dest))?;
    let mut writer = BufWriter::new(file);
    let mut reader = ProgressRead::new(response, progress.clone());
    io::copy(&mut reader, &mut writer).map_err(|e| failed(e.to_string()))?;
    writer.flush().map_err(|e| io_error_with_path(e, dest))?;

    let written = reader.bytes_read();
    if let Some(p) = &progress {
        p.finish();
    }
    log::debug!("Downloaded {} bytes to '{}'", written, dest.display());
    Ok(written)
}

/// Builds a blocking `reqwest` client for archive downloads.
///
/// Only the connect phase is bounded; large archives may take as long as they need.
fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(None::<Duration>)
        .build()
}
