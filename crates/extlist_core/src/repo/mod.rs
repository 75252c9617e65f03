//! Repository layer: the in-memory extension store and persisted preferences.
//!
//! # Responsibility
//! - Own the extension collection for the lifetime of the page.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Extension state is never persisted; only preferences reach storage.
//! - Lookup misses are reported as `None`/`false`, not as errors.

pub mod extension_store;
pub mod preference_repo;
