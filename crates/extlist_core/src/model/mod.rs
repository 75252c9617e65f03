//! Extension list domain model.
//!
//! # Responsibility
//! - Define the wire record served by the data source.
//! - Define the in-memory extension carrying a stable identifier.
//!
//! # Invariants
//! - Every in-memory extension is identified by an `ExtensionId` assigned at load.
//! - Display text (`name`) is never used as identity by handlers.

pub mod extension;
pub mod filter;
pub mod theme;
