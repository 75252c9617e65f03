//! Extension data sources.
//!
//! # Responsibility
//! - Fetch the JSON array of extension records from a fixed location.
//! - Map transport, status and parse failures to `SourceError`.
//!
//! # Invariants
//! - A source never returns a partial collection: either every record
//!   parses or the whole fetch fails.
//! - Non-success HTTP statuses are failures, never empty collections.

use crate::model::extension::ExtensionRecord;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Location used when no data source is configured.
pub const DEFAULT_DATA_LOCATION: &str = "./data.json";

pub type SourceResult<T> = Result<T, SourceError>;

/// Data source failure.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Status {
        location: String,
        status: u16,
    },
    Transport {
        location: String,
        message: String,
    },
    Parse(serde_json::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Status { location, status } => {
                write!(f, "HTTP error! status: {status} ({location})")
            }
            Self::Transport { location, message } => {
                write!(f, "request to `{location}` failed: {message}")
            }
            Self::Parse(err) => write!(f, "invalid extension data: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Status { .. } | Self::Transport { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// External collaborator returning the extension records.
pub trait ExtensionSource {
    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
    fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>>;
}

/// Parses the JSON array served by a data source.
pub fn parse_records(body: &str) -> SourceResult<Vec<ExtensionRecord>> {
    Ok(serde_json::from_str(body)?)
}

/// Reads records from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExtensionSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_records(&body)
    }
}

/// Fetches records over HTTP with a blocking client.
///
/// No timeout is applied unless one is configured; a hung request delays
/// the caller indefinitely.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ExtensionSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>> {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let agent = builder.build();

        let response = match agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(SourceError::Status {
                    location: self.url.clone(),
                    status,
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(SourceError::Transport {
                    location: self.url.clone(),
                    message: transport.to_string(),
                });
            }
        };

        let body = response
            .into_string()
            .map_err(|err| SourceError::Transport {
                location: self.url.clone(),
                message: format!("failed to read response body: {err}"),
            })?;
        parse_records(&body)
    }
}

/// Picks the source implementation for a configured location.
///
/// `http://` and `https://` locations are fetched over HTTP; anything else
/// is treated as a file path.
pub fn source_for_location(location: &str, timeout: Option<Duration>) -> Box<dyn ExtensionSource> {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        let source = HttpSource::new(trimmed);
        match timeout {
            Some(timeout) => Box::new(source.with_timeout(timeout)),
            None => Box::new(source),
        }
    } else {
        Box::new(FileSource::new(trimmed))
    }
}

/// Fetches from `source`, logging the outcome.
///
/// # Side effects
/// - Emits `data_load` logging events with duration, count and status.
pub fn fetch_logged(source: &dyn ExtensionSource) -> SourceResult<Vec<ExtensionRecord>> {
    let started_at = Instant::now();
    let location = source.location();
    info!("event=data_load module=source status=start location={location}");

    match source.fetch() {
        Ok(records) => {
            info!(
                "event=data_load module=source status=ok location={location} count={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(records)
        }
        Err(err) => {
            error!(
                "event=data_load module=source status=error location={location} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
