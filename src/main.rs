// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use take::cli::{normalize_legacy_flags, version_line, Cli};
use take::config::OptionsBuilder;
#[cfg(feature = "progress")]
use take::progress::IndicatifProgress;
use take::progress::ProgressReporter;
use take::shell::Shell;
use take::take;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the resulting path.
    // RUST_LOG, when set, replaces the default filter entirely.
    let default_filter = if cfg!(debug_assertions) {
        "take=debug"
    } else {
        "take=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    log::debug!("Starting take v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args_os().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!(
            "take: internal error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    // --- Setup ---
    let cli = match Cli::try_parse_from(normalize_legacy_flags(std::env::args_os())) {
        Ok(cli) => cli,
        // Usage errors exit 1 like every other failure; help text exits 0.
        Err(e) if e.use_stderr() => {
            eprint!("{}", e);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    if let Some(name) = cli.init.as_deref() {
        match Shell::from_name(name) {
            Ok(shell) => {
                println!("{}", shell.setup_script());
                return Ok(());
            }
            Err(e) => {
                eprintln!("take: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Show a progress bar only when stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let options = match OptionsBuilder::from_cli(cli).build() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("take: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Options: {:?}", options);

    match take(&options, progress_reporter) {
        Ok(outcome) => {
            log::debug!("Finished with {:?}", outcome.action);
            println!("{}", outcome.final_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("take: {}", e);
            std::process::exit(1);
        }
    }
}
