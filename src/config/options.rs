// src/config/options.rs
use std::env;
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the snapshot, version tag and log live.
    pub project_dir: PathBuf,
    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            log_filter: s!(DEFAULT_LOG_FILTER),
        }
    }
}

impl AppOptions {
    /// Defaults, then environment overrides.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
            opts.project_dir = PathBuf::from(dir);
        }
        if let Ok(filter) = env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                opts.log_filter = filter;
            }
        }
        opts
    }

    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn log_path(&self) -> PathBuf { self.project_dir.join(LOG_FILE) }
}

/// `$HOME/.iampolicyhelper`, or `./.iampolicyhelper` without a home directory.
pub fn default_project_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(PROJECT_DIR)
}
