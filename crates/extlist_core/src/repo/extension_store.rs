//! In-memory extension store.
//!
//! # Responsibility
//! - Hold the ordered extension collection loaded at startup.
//! - Provide lookup and mutation by stable id and by display name.
//!
//! # Invariants
//! - Order is load order; no operation reorders entries.
//! - Lookup misses are silent no-ops reported through `bool`/`Option`.
//! - Mutations are immediately visible to subsequent reads.

use crate::model::extension::{Extension, ExtensionId, ExtensionRecord};
use crate::model::filter::FilterMode;
use log::debug;

/// Ordered collection of loaded extensions.
#[derive(Debug, Default)]
pub struct ExtensionStore {
    entries: Vec<Extension>,
}

impl ExtensionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection, assigning fresh ids in input order.
    ///
    /// Returns the ids assigned to `records`, in the same order.
    pub fn replace_all(&mut self, records: Vec<ExtensionRecord>) -> Vec<ExtensionId> {
        self.entries = records.into_iter().map(Extension::from_record).collect();
        self.entries.iter().map(|extension| extension.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all extensions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.entries.iter()
    }

    /// Returns extensions matching `mode`, in load order.
    pub fn filtered(&self, mode: FilterMode) -> Vec<&Extension> {
        self.entries
            .iter()
            .filter(|extension| mode.matches(extension))
            .collect()
    }

    pub fn get(&self, id: ExtensionId) -> Option<&Extension> {
        self.entries.iter().find(|extension| extension.id == id)
    }

    /// Returns the first extension whose `name` equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Extension> {
        self.entries.iter().find(|extension| extension.name == name)
    }

    /// Sets `is_active` on the extension with `id`.
    ///
    /// Returns `false` when no such extension exists.
    pub fn set_active_by_id(&mut self, id: ExtensionId, value: bool) -> bool {
        match self.entries.iter_mut().find(|extension| extension.id == id) {
            Some(extension) => {
                extension.is_active = value;
                true
            }
            None => {
                debug!("event=store_set_active module=store status=miss id={id}");
                false
            }
        }
    }

    /// Sets `is_active` on the first extension named `name`.
    ///
    /// Returns `false` when no such extension exists.
    pub fn set_active(&mut self, name: &str, value: bool) -> bool {
        match self.find_by_name(name).map(|extension| extension.id) {
            Some(id) => self.set_active_by_id(id, value),
            None => {
                debug!("event=store_set_active module=store status=miss by=name");
                false
            }
        }
    }

    /// Removes the extension with `id` and returns it.
    pub fn remove(&mut self, id: ExtensionId) -> Option<Extension> {
        match self.entries.iter().position(|extension| extension.id == id) {
            Some(index) => Some(self.entries.remove(index)),
            None => {
                debug!("event=store_remove module=store status=miss id={id}");
                None
            }
        }
    }

    /// Removes the first extension named `name` and returns it.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Extension> {
        match self.find_by_name(name).map(|extension| extension.id) {
            Some(id) => self.remove(id),
            None => {
                debug!("event=store_remove module=store status=miss by=name");
                None
            }
        }
    }
}
