//! Core logic for the extensions list.
//! This crate owns the extension collection, its list view and the theme
//! preference; hosts only forward events and draw the rendered output.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod source;
pub mod view;

pub use app::{DispatchOutcome, ExtensionsApp};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::extension::{Extension, ExtensionId, ExtensionRecord};
pub use model::filter::{FilterMode, FilterParseError};
pub use model::theme::{Theme, ThemeButtons, THEME_PREFERENCE_KEY};
pub use repo::extension_store::ExtensionStore;
pub use repo::preference_repo::{
    MemoryPreferenceRepository, PreferenceRepository, RepoError, RepoResult,
    SqlitePreferenceRepository,
};
pub use service::page_service::{ExtensionsPage, LoadState};
pub use service::theme_service::ThemeService;
pub use source::{
    parse_records, source_for_location, ExtensionSource, FileSource, HttpSource, SourceError,
    SourceResult,
};
pub use view::event::{EventError, UiEvent};
pub use view::list_view::{CardPhase, ExtensionCard, ExtensionListView, REMOVE_TRANSITION};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
