//! File-based tracing setup.
//!
//! The terminal is the UI, so logs go to a file in the platform data
//! directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "folio.log";

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `default_level`.
/// Returns the log file path, or `None` when logging could not be set up;
/// the app runs without logs in that case.
pub fn init(default_level: &str) -> Option<PathBuf> {
    let dir = folio_config::project_dirs()?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}
