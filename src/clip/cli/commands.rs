use super::render::print_result;
use super::setup::{usage, Cli};
use clap::Parser;
use clip::api::{ClipApi, StdinPipe};
use clip::config::ClipConfig;
use clip::error::{ClipError, Result};
use clip::store::fs::FileStore;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the platform data directory (history and config live there).
const HOME_ENV: &str = "CLIP_HOME";
/// Log filter, e.g. `CLIP_LOG=debug`.
const LOG_ENV: &str = "CLIP_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let data_dir = data_dir()?;
    debug!(path = %data_dir.display(), "using data directory");

    let config = ClipConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        ClipConfig::default()
    });

    let mut api = ClipApi::open(FileStore::new(data_dir))?;
    let invocation = cli.invocation(&config);

    let outcome = api.run(&invocation, &mut StdinPipe).and_then(|result| {
        if result.show_help {
            eprint!("{}", usage());
        }
        print_result(&result).map_err(ClipError::Io)
    });

    // Saved even when the command failed; a failed operation leaves the history as loaded.
    if let Err(e) = api.save() {
        warn!(error = %e, "failed to save clipboard history");
    }

    outcome
}

/// Prints an error to stderr, followed by usage when the user can fix it.
pub fn report_error(error: &ClipError) {
    eprintln!("{} {}", "Error:".red(), error);
    if error.is_usage() {
        eprintln!();
        eprint!("{}", usage());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "clip")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ClipError::Store("Could not determine data directory".to_string()))
}
