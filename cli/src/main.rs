//! Tabula CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> TabulaConfig -> run_session(sheet, stdin, terminal)
//!                                                  |
//!                                                  v
//!                              menu -> option -> command lifecycle -> menu ...
//! ```
//!
//! Logs go to a file so they never interleave with the interaction on stdout.

mod terminal;

use anyhow::{Context, Result};
use std::{
    fs::{self, File, OpenOptions},
    io::{stdin, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tabula_config::TabulaConfig;
use tabula_core::LinePrompter;
use tabula_engine::{Spreadsheet, run_session};

use terminal::TerminalDevice;

/// Candidate log locations, most preferred first.
fn log_paths() -> Vec<PathBuf> {
    let home = TabulaConfig::path()
        .and_then(|config| config.parent().map(|dir| dir.join("logs")));
    home.into_iter()
        .chain([PathBuf::from(".tabula").join("logs")])
        .map(|dir| dir.join("tabula.log"))
        .collect()
}

/// First log file that can be opened for appending, plus the reasons the
/// earlier candidates were skipped.
fn open_log() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut skipped = Vec::new();
    let opened = log_paths().into_iter().find_map(|path| {
        let attempt = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| OpenOptions::new().create(true).append(true).open(&path));
        match attempt {
            Ok(file) => Some((path, file)),
            Err(e) => {
                skipped.push(format!("{}: {e}", path.display()));
                None
            }
        }
    });
    (opened, skipped)
}

fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (opened, skipped) = open_log();
    let Some((path, file)) = opened else {
        // stdout belongs to the session
        tracing_subscriber::registry().with(filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    tracing::info!(path = %path.display(), "Logging to file");
    for reason in skipped {
        tracing::warn!(%reason, "Skipped log location");
    }
}

fn load_config() -> TabulaConfig {
    match TabulaConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Ignoring config: {err}");
            TabulaConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let config = load_config();
    init_tracing(config.log_filter());

    let (rows, columns) = config.sheet_size();
    tracing::info!(rows, columns, "Starting session");
    let mut sheet = Spreadsheet::new(rows, columns);

    let mut prompter =
        LinePrompter::new(stdin().lock(), stdout()).with_suffix(config.prompt_suffix());
    let mut device = TerminalDevice::new(stdout());

    let stats = run_session(&mut sheet, &mut prompter, &mut device, config.menu_title())
        .context("reading user input")?;
    tracing::info!(?stats, "Exiting");

    if stats.unexpected > 0 {
        eprintln!(
            "{} command(s) failed unexpectedly; see the log for details",
            stats.unexpected
        );
    }

    Ok(())
}
