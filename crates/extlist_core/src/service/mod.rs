//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate store, view and preference calls into page-level APIs.
//! - Keep hosts decoupled from storage and rendering details.

pub mod page_service;
pub mod theme_service;
