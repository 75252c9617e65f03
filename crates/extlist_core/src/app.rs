//! Application state object.
//!
//! # Responsibility
//! - Own the extension page and the theme for one page lifetime.
//! - Route every delegated `UiEvent` to the matching use-case.
//!
//! # Invariants
//! - Handlers run one at a time with exclusive access to the state.
//! - Unknown extension ids are ignored without error.

use crate::model::theme::Theme;
use crate::repo::preference_repo::{PreferenceRepository, RepoError};
use crate::service::page_service::{ExtensionsPage, LoadState};
use crate::service::theme_service::ThemeService;
use crate::source::ExtensionSource;
use crate::view::event::UiEvent;
use crate::view::html::{filter_bar_html, list_html, theme_buttons_html};
use log::debug;
use std::time::Instant;

/// What a dispatched event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Rerendered,
    Updated,
    ThemeChanged(Theme),
    Ignored,
}

/// Page state plus theme, constructed once at startup.
pub struct ExtensionsApp<R: PreferenceRepository> {
    page: ExtensionsPage,
    theme: ThemeService<R>,
}

impl<R: PreferenceRepository> ExtensionsApp<R> {
    /// Restores the theme; the collection stays empty until `startup`.
    pub fn new(preferences: R) -> Self {
        Self {
            page: ExtensionsPage::new(),
            theme: ThemeService::load(preferences),
        }
    }

    /// Loads the collection and renders it. Never fails; see `ExtensionsPage::startup`.
    pub fn startup(&mut self, source: &dyn ExtensionSource) -> LoadState {
        self.page.startup(source)
    }

    pub fn page(&self) -> &ExtensionsPage {
        &self.page
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Handles one delegated event at time `now`.
    ///
    /// # Errors
    /// - Returns the repository error when a theme change cannot be saved.
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> Result<DispatchOutcome, RepoError> {
        self.page.tick(now);
        let outcome = match event {
            UiEvent::FilterSelected(mode) => {
                self.page.apply_filter(mode);
                DispatchOutcome::Rerendered
            }
            UiEvent::ToggleChanged { id, checked } => {
                if self.page.toggle(id, checked) {
                    DispatchOutcome::Updated
                } else {
                    DispatchOutcome::Ignored
                }
            }
            UiEvent::RemoveClicked { id } => {
                if self.page.remove(id, now) {
                    DispatchOutcome::Updated
                } else {
                    DispatchOutcome::Ignored
                }
            }
            UiEvent::ThemeSelected(theme) => {
                self.theme.set_theme(theme)?;
                DispatchOutcome::ThemeChanged(theme)
            }
            UiEvent::ThemeToggled => DispatchOutcome::ThemeChanged(self.theme.toggle()?),
        };
        debug!("event=ui_dispatch module=app status=ok event={event:?} outcome={outcome:?}");
        Ok(outcome)
    }

    /// Detaches cards whose removal transition has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.page.tick(now);
    }

    /// Renders the page body: theme buttons, filter bar and list.
    pub fn to_html(&self) -> String {
        let theme = self.theme.current();
        let body_class = theme
            .body_class()
            .map(|class| format!(" class=\"{class}\""))
            .unwrap_or_default();
        format!(
            "<body{body_class}>{}{}{}</body>",
            theme_buttons_html(theme),
            filter_bar_html(self.page.filter()),
            list_html(self.page.view())
        )
    }
}
