//! Host configuration.
//!
//! # Responsibility
//! - Collect the data location, preference store and logging settings a
//!   host needs to construct the application.
//!
//! # Invariants
//! - Defaults match the widget: data at `./data.json`, no fetch timeout.

use crate::logging::default_log_level;
use crate::source::{source_for_location, ExtensionSource, DEFAULT_DATA_LOCATION};
use std::path::PathBuf;
use std::time::Duration;

/// File name of the preference database when no path is configured.
pub const DEFAULT_PREFERENCES_FILE_NAME: &str = "extlist_prefs.sqlite3";

/// Application configuration assembled by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File path or `http(s)://` URL serving the extension records.
    pub data_location: String,
    /// SQLite file holding persisted preferences.
    pub preferences_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Optional HTTP fetch timeout.
    pub fetch_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            fetch_timeout: None,
        }
    }
}

impl AppConfig {
    /// Builds the data source for `data_location`.
    pub fn source(&self) -> Box<dyn ExtensionSource> {
        source_for_location(&self.data_location, self.fetch_timeout)
    }
}
