//! Theme preference model.

use std::fmt::{Display, Formatter};

/// Storage key holding the persisted theme.
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Light/dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored preference value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class applied to the page body, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of the two theme switch buttons.
///
/// The button selecting the current theme is hidden; only the switch to the
/// other theme is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeButtons {
    pub light_hidden: bool,
    pub dark_hidden: bool,
}

impl ThemeButtons {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                light_hidden: true,
                dark_hidden: false,
            },
            Theme::Dark => Self {
                light_hidden: false,
                dark_hidden: true,
            },
        }
    }
}
