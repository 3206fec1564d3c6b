//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate URL conventions and component lifetime plumbing
//! from page and component logic to improve reuse and testability.

pub mod mount;
pub mod mux;
