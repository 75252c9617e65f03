//! Filter modes for the extension list.

use crate::model::extension::Extension;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which subset of the store the list view shows.
///
/// Modes are mutually exclusive and any mode can follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Inactive,
}

impl FilterMode {
    /// All modes in filter-button order.
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Inactive];

    /// Parses a filter button label.
    ///
    /// Unknown labels fall back to `All`, so a host can pass raw button text.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Returns the stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Returns whether `extension` belongs to this mode.
    pub fn matches(self, extension: &Extension) -> bool {
        match self {
            Self::All => true,
            Self::Active => extension.is_active,
            Self::Inactive => !extension.is_active,
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(FilterParseError(other.to_string())),
        }
    }
}

/// Strict filter label parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError(pub String);

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported filter `{}`; expected all|active|inactive",
            self.0
        )
    }
}

impl Error for FilterParseError {}
