// src/log.rs
// File logging for the CLI. Library code only emits `tracing` events; nothing
// is written until a binary calls `init`.
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::uptime;
use tracing_subscriber::EnvFilter;

use crate::config::consts::DEFAULT_LOG_FILTER;
use crate::config::options::AppOptions;

/// Append `[elapsed] LEVEL message` lines to `<project dir>/debug.log`.
///
/// A bad filter directive falls back to the default one. Calling this twice
/// keeps the first subscriber.
pub fn init(opts: &AppOptions) -> io::Result<()> {
    let path = opts.log_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(&opts.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(uptime())
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}
