//! Derives clone target names from git URLs and detects local repositories.

use crate::constants::GIT_METADATA_DIR;
use std::path::Path;

/// Name used when nothing usable can be derived from the URL.
const FALLBACK_REPO_NAME: &str = "repository";

/// Derives the directory a repository is cloned into from its URL.
///
/// A trailing `.git` (and trailing slash) is stripped. For SSH-style references
/// (`user@host:owner/repo`) the part after the last `:` is used, then the final
/// `/` segment; for every other URL or path the final path segment is used.
///
/// # Examples
/// ```
/// use take::git::repo_name;
///
/// assert_eq!(repo_name("git@github.com:owner/repo.git"), "repo");
/// assert_eq!(repo_name("https://github.com/owner/repo.git"), "repo");
/// assert_eq!(repo_name("/srv/git/project"), "project");
/// ```
pub fn repo_name(url: &str) -> String {
    let trimmed = url.trim_end_matches(['/', '\\']);
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let trimmed = trimmed.trim_end_matches(['/', '\\']);

    let path_part = if !trimmed.contains("://") && trimmed.contains('@') {
        trimmed.rsplit(':').next().unwrap_or(trimmed)
    } else {
        trimmed
    };

    match path_part.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name.to_string(),
        _ => FALLBACK_REPO_NAME.to_string(),
    }
}

/// Returns `true` if `dir` contains a `.git` metadata directory.
pub fn is_git_repo(dir: &Path) -> bool {
    dir.join(GIT_METADATA_DIR).is_dir()
}
