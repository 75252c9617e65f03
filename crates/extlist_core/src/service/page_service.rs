//! Extension list page use-cases.
//!
//! # Responsibility
//! - Load the collection once and render it.
//! - Apply filter, toggle and remove interactions against store and view.
//!
//! # Invariants
//! - Filtering never mutates the store.
//! - A failed startup load leaves the store empty and the view unrendered.
//! - Toggle does not re-render; the card stays under the current filter
//!   until the next filter application.

use crate::model::extension::ExtensionId;
use crate::model::filter::FilterMode;
use crate::repo::extension_store::ExtensionStore;
use crate::source::{fetch_logged, ExtensionSource, SourceResult};
use crate::view::list_view::ExtensionListView;
use log::{error, info};
use std::time::Instant;

/// Outcome of the startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded { count: usize },
    Failed,
}

/// Store, view and filter mode of the extension list.
#[derive(Debug)]
pub struct ExtensionsPage {
    store: ExtensionStore,
    view: ExtensionListView,
    filter: FilterMode,
    load_state: LoadState,
}

impl Default for ExtensionsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionsPage {
    pub fn new() -> Self {
        Self {
            store: ExtensionStore::new(),
            view: ExtensionListView::new(),
            filter: FilterMode::All,
            load_state: LoadState::Pending,
        }
    }

    pub fn store(&self) -> &ExtensionStore {
        &self.store
    }

    pub fn view(&self) -> &ExtensionListView {
        &self.view
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Fetches records from `source`, replaces the whole collection and
    /// re-renders it under the current filter.
    ///
    /// On failure the store and view are left untouched.
    pub fn load(&mut self, source: &dyn ExtensionSource) -> SourceResult<usize> {
        let records = fetch_logged(source)?;
        let count = self.store.replace_all(records).len();
        self.view.render(self.store.filtered(self.filter));
        Ok(count)
    }

    /// Loads the collection and renders every record.
    ///
    /// Load failures are logged and swallowed: the store stays empty, the
    /// view stays unrendered and no error reaches the caller.
    pub fn startup(&mut self, source: &dyn ExtensionSource) -> LoadState {
        self.load_state = match self.load(source) {
            Ok(count) => LoadState::Loaded { count },
            Err(err) => {
                error!("event=page_startup module=page status=error error={err}");
                LoadState::Failed
            }
        };
        self.load_state
    }

    /// Re-renders the view with records matching `mode`.
    pub fn apply_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.view.render(self.store.filtered(mode));
        info!(
            "event=filter_apply module=page status=ok filter={mode} shown={}",
            self.view.cards().len()
        );
    }

    /// Sets the extension's active state from its toggle control.
    ///
    /// Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: ExtensionId, checked: bool) -> bool {
        if !self.store.set_active_by_id(id, checked) {
            return false;
        }
        self.view.set_checked(id, checked);
        if let Some(extension) = self.store.get(id) {
            info!(
                "event=extension_toggle module=page status=ok id={id} state={}",
                extension.state_label()
            );
        }
        true
    }

    /// Removes the extension and starts its card's removal transition.
    ///
    /// Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: ExtensionId, now: Instant) -> bool {
        if self.store.remove(id).is_none() {
            return false;
        }
        self.view.begin_removal(id, now);
        info!("event=extension_remove module=page status=ok id={id}");
        true
    }

    /// Detaches cards whose removal transition has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<ExtensionId> {
        self.view.detach_expired(now)
    }
}
