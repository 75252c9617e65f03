//! Delegated UI events.
//!
//! One listener on the list container receives every interaction and turns
//! the target's data attributes into a `UiEvent`.

use crate::model::extension::ExtensionId;
use crate::model::filter::FilterMode;
use crate::model::theme::Theme;
use crate::view::html::{ACTION_REMOVE, ACTION_TOGGLE};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// User interaction dispatched to the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    FilterSelected(FilterMode),
    ToggleChanged { id: ExtensionId, checked: bool },
    RemoveClicked { id: ExtensionId },
    ThemeSelected(Theme),
    ThemeToggled,
}

impl UiEvent {
    /// Builds an event from a card control's data attributes.
    ///
    /// `checked` is the checkbox state for toggle actions and ignored for
    /// remove actions.
    pub fn from_dataset(action: &str, extension_id: &str, checked: bool) -> Result<Self, EventError> {
        let id = Uuid::parse_str(extension_id.trim())
            .map_err(|_| EventError::InvalidExtensionId(extension_id.to_string()))?;
        match action {
            ACTION_TOGGLE => Ok(Self::ToggleChanged { id, checked }),
            ACTION_REMOVE => Ok(Self::RemoveClicked { id }),
            other => Err(EventError::UnknownAction(other.to_string())),
        }
    }
}

/// Malformed delegated event target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    UnknownAction(String),
    InvalidExtensionId(String),
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(f, "unknown data-action `{action}`"),
            Self::InvalidExtensionId(value) => {
                write!(f, "invalid data-extension-id `{value}`")
            }
        }
    }
}

impl Error for EventError {}
