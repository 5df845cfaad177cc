// src/shell.rs

//! Shell integration: the small functions that call `take` and `cd` into its output.
//!
//! `take` cannot change its parent shell's directory, so each supported shell
//! gets a wrapper function (printed by `take --init <shell>`) that runs the
//! binary and changes into the printed path on success.

use std::env;
use std::fmt;
use std::str::FromStr;

const POSIX_SETUP: &str = r#"take() {
    if [ -z "$1" ]; then
        echo "Usage: take [--depth N] [--force] <directory|git-url|archive-url>" >&2
        return 1
    fi
    local take_result
    take_result="$(command take "$@")" || return $?
    cd "$take_result" || return $?
}"#;

const POWERSHELL_SETUP: &str = r#"function Take {
    if ($args.Count -eq 0) {
        Write-Error "Usage: Take [--depth N] [--force] <directory|git-url|archive-url>"
        return
    }
    $exe = Get-Command take -CommandType Application | Select-Object -First 1
    $result = & $exe @args
    if ($LASTEXITCODE -eq 0) {
        Set-Location -LiteralPath $result
    }
}"#;

const CMD_SETUP: &str = r#"@echo off
doskey take=for /f "delims=" %%i in ('take.exe $*') do @cd /d "%%i""#;

/// The shells `take` can integrate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    PowerShell,
    Cmd,
}

impl Shell {
    /// Detects the current shell from the environment.
    pub fn detect() -> Self {
        Self::detect_from(
            env::var_os("PSModulePath").is_some(),
            cfg!(windows),
            env::var("SHELL").ok().as_deref(),
        )
    }

    /// Detection rules: PowerShell wins when its module path is set, Windows
    /// otherwise means cmd, then `$SHELL` decides between zsh and bash.
    pub fn detect_from(in_powershell: bool, is_windows: bool, shell_var: Option<&str>) -> Self {
        if in_powershell {
            return Shell::PowerShell;
        }
        if is_windows {
            return Shell::Cmd;
        }
        match shell_var {
            Some(s) if s.ends_with("zsh") => Shell::Zsh,
            _ => Shell::Bash,
        }
    }

    /// Resolves the `--init` argument; `auto` means [`Shell::detect`].
    pub fn from_name(name: &str) -> Result<Self, UnknownShell> {
        if name.eq_ignore_ascii_case("auto") {
            return Ok(Self::detect());
        }
        name.parse()
    }

    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::PowerShell => "powershell",
            Shell::Cmd => "cmd",
        }
    }

    /// The command that changes into `path` in this shell.
    pub fn change_dir(self, path: &str) -> String {
        match self {
            Shell::Bash | Shell::Zsh => format!("cd {}", posix_quote(path)),
            Shell::PowerShell => format!("Set-Location {}", windows_quote(path)),
            Shell::Cmd => format!("cd /d {}", windows_quote(path)),
        }
    }

    /// The wrapper function to add to this shell's startup file.
    pub fn setup_script(self) -> &'static str {
        match self {
            Shell::Bash | Shell::Zsh => POSIX_SETUP,
            Shell::PowerShell => POWERSHELL_SETUP,
            Shell::Cmd => CMD_SETUP,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unsupported shell name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported shell '{0}' (expected bash, zsh, powershell or cmd)")]
pub struct UnknownShell(pub String);

impl FromStr for Shell {
    type Err = UnknownShell;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bash" | "sh" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            "cmd" => Ok(Shell::Cmd),
            _ => Err(UnknownShell(s.to_string())),
        }
    }
}

fn posix_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn windows_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
