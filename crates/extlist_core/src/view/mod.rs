//! View layer: list view model, HTML rendering and delegated events.
//!
//! # Responsibility
//! - Turn store snapshots into rendered cards without touching the store.
//! - Translate container-level interactions into `UiEvent`s.
//!
//! # Invariants
//! - Rendering is a pure function of its input sequence.
//! - Events identify extensions by id, never by displayed text.

pub mod event;
pub mod html;
pub mod list_view;
