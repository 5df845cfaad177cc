// src/cli.rs

use clap::Parser;
use std::ffi::OsString;

/// Create a directory, clone a git repository, or download and extract an archive.
///
/// take prints the absolute path of the resulting directory on standard output so a
/// shell function can change into it. Local paths are created (including parents),
/// git URLs and local repositories are cloned, and .tar.gz/.tgz/.tar.bz2/.tar.xz/.zip
/// URLs are downloaded and unpacked into the current directory.
#[derive(Parser, Debug)]
#[command(name = "take", author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Directory to create, git URL to clone, or archive URL to download and extract.
    #[arg(value_name = "TARGET", required_unless_present_any = ["version", "init"])]
    pub target: Option<String>,

    /// Git clone depth (0 for a full clone).
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub depth: u32,

    /// Replace an existing destination directory instead of failing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub force: bool,

    /// Print version information and exit.
    #[arg(short = 'V', long, action = clap::ArgAction::SetTrue)]
    pub version: bool,

    /// Print the shell integration function and exit (bash, zsh, powershell, cmd; detected when omitted).
    #[arg(long, value_name = "SHELL", num_args = 0..=1, default_missing_value = "auto")]
    pub init: Option<String>,
}

/// Long flags that older wrappers pass with a single dash (`-depth 3`).
const LEGACY_LONG_FLAGS: &[&str] = &["depth", "force", "version", "init"];

/// Rewrites single-dash long flags (`-depth`, `-depth=3`, `-force`, `-version`, `-init`)
/// into their double-dash forms so clap understands them.
///
/// # Examples
/// ```
/// use take::cli::normalize_legacy_flags;
///
/// let args = normalize_legacy_flags(["take", "-depth", "1", "-force", "repo"]);
/// assert_eq!(args, ["take", "--depth", "1", "--force", "repo"]);
/// ```
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut seen_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if seen_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                seen_separator = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split('=').next().unwrap_or(flag);
            if LEGACY_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

/// The line printed by `--version`: version, commit and build date.
pub fn version_line() -> String {
    format!(
        "take version {} ({}) built on {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("TAKE_COMMIT").unwrap_or("none"),
        option_env!("TAKE_BUILD_DATE").unwrap_or("unknown"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["take", "newdir"]);
        assert_eq!(cli.target.as_deref(), Some("newdir"));
        assert_eq!(cli.depth, 0);
        assert!(!cli.force);
        assert!(!cli.version);
        assert!(cli.init.is_none());
    }

    #[test]
    fn test_target_required_unless_version_or_init() {
        assert!(Cli::try_parse_from(["take"]).is_err());
        assert!(Cli::try_parse_from(["take", "--version"]).is_ok());
        let cli = Cli::try_parse_from(["take", "--init"]).unwrap();
        assert_eq!(cli.init.as_deref(), Some("auto"));
        let cli = Cli::try_parse_from(["take", "--init", "zsh"]).unwrap();
        assert_eq!(cli.init.as_deref(), Some("zsh"));
    }

    #[test]
    fn test_negative_depth_rejected() {
        assert!(Cli::try_parse_from(["take", "--depth", "-1", "repo"]).is_err());
    }

    #[test]
    fn test_legacy_flags_parse() {
        let args = normalize_legacy_flags(["take", "-depth=2", "-force", "git@h:o/r.git"]);
        let cli = Cli::parse_from(args);
        assert_eq!(cli.depth, 2);
        assert!(cli.force);
        assert_eq!(cli.target.as_deref(), Some("git@h:o/r.git"));
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let args = normalize_legacy_flags(["take", "-V", "--force", "-", "--", "-depth"]);
        assert_eq!(args, ["take", "-V", "--force", "-", "--", "-depth"]);
    }

    #[test]
    fn test_version_line_shape() {
        let line = version_line();
        assert!(line.starts_with("take version "));
        assert!(line.contains(env!("CARGO_PKG_VERSION")));
        assert!(line.contains(" built on "));
    }
}
