//! Runtime configuration.
//!
//! The database path and log filter are resolved from, in order: an explicit
//! command-line value, the `LAWNCARE_DB` / `LAWNCARE_LOG` environment
//! variables, and finally an XDG-style default.

use std::env;
use std::path::PathBuf;

pub const DB_ENV: &str = "LAWNCARE_DB";
pub const LOG_ENV: &str = "LAWNCARE_LOG";

/// Directory name under the data home.
pub const APP_DIR: &str = "lawncare";
pub const DB_FILE: &str = "lawn_database.db";
pub const DEFAULT_LOG_FILTER: &str = "lawncare=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Resolve against the process environment.
    pub fn from_env(db_flag: Option<PathBuf>) -> Self {
        Self::resolve(db_flag, |key| env::var(key).ok())
    }

    /// Resolve with an explicit variable lookup.
    pub fn resolve(db_flag: Option<PathBuf>, var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let db_path = db_flag
            .or_else(|| non_empty(DB_ENV).map(PathBuf::from))
            .unwrap_or_else(|| default_data_dir(&non_empty).join(DB_FILE));

        let log_filter = non_empty(LOG_ENV)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            db_path,
            log_filter,
        }
    }
}

/// `$XDG_DATA_HOME/lawncare`, else `$HOME/.local/share/lawncare`, else the
/// current directory.
fn default_data_dir(var: &impl Fn(&str) -> Option<String>) -> PathBuf {
    var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .map(|base| base.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
