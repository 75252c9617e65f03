//! Theme preference use-case service.
//!
//! # Responsibility
//! - Read the persisted theme once at startup.
//! - Write the preference on every theme change.
//!
//! # Invariants
//! - Missing, unrecognized or unreadable stored values resolve to `Light`.
//! - The in-memory theme changes even when persisting it fails.

use crate::model::theme::{Theme, ThemeButtons, THEME_PREFERENCE_KEY};
use crate::repo::preference_repo::{PreferenceRepository, RepoResult};
use log::{info, warn};

/// Current theme backed by a preference repository.
pub struct ThemeService<R: PreferenceRepository> {
    repo: R,
    current: Theme,
}

impl<R: PreferenceRepository> ThemeService<R> {
    /// Creates the service and restores the saved theme.
    pub fn load(repo: R) -> Self {
        let current = match repo.get_preference(THEME_PREFERENCE_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("event=theme_load module=theme status=fallback reason=unrecognized_value");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("event=theme_load module=theme status=fallback error={err}");
                Theme::default()
            }
        };
        info!("event=theme_load module=theme status=ok theme={current}");
        Self { repo, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn buttons(&self) -> ThemeButtons {
        ThemeButtons::for_theme(self.current)
    }

    /// Applies `theme` and persists it.
    ///
    /// # Errors
    /// - Returns the repository error when the write fails; the theme is
    ///   still applied in memory.
    pub fn set_theme(&mut self, theme: Theme) -> RepoResult<()> {
        self.current = theme;
        match self
            .repo
            .set_preference(THEME_PREFERENCE_KEY, theme.as_str())
        {
            Ok(()) => {
                info!("event=theme_set module=theme status=ok theme={theme}");
                Ok(())
            }
            Err(err) => {
                warn!("event=theme_set module=theme status=error theme={theme} error={err}");
                Err(err)
            }
        }
    }

    /// Switches to the other theme and persists it.
    pub fn toggle(&mut self) -> RepoResult<Theme> {
        let next = self.current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
